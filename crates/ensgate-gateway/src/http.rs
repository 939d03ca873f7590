//! HTTP backend abstraction for gateway requests.
//!
//! The client is generic over [`HttpBackend`] so tests can swap in a fake.
//! Status codes are returned, not interpreted; the client decides what counts
//! as success.

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::config::GatewayClientConfig;
use crate::error::{GatewayError, GatewayResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Trait for HTTP backends that can issue gateway requests.
///
/// This is an implementation detail - external code should use the
/// `GatewayPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Issue a `GET`.
    async fn get(&self, url: &Url) -> GatewayResult<HttpReply>;

    /// Issue a `POST` with a JSON body.
    async fn post_json<T: Serialize + Sync>(&self, url: &Url, body: &T)
    -> GatewayResult<HttpReply>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// There is no retry here: fallback across gateways is decided by the
/// caller, one attempt per URL.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &GatewayClientConfig) -> GatewayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(GatewayError::ClientBuild)?;

        Ok(Self { client })
    }

    async fn send(&self, url: &Url, request: reqwest::RequestBuilder) -> GatewayResult<HttpReply> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(url, &e))?;

        Ok(HttpReply { status, body })
    }
}

/// Distinguish a timeout from other transport failures.
fn transport_error(url: &Url, error: &reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout {
            url: url.to_string(),
        }
    } else {
        GatewayError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get(&self, url: &Url) -> GatewayResult<HttpReply> {
        self.send(url, self.client.get(url.as_str())).await
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        url: &Url,
        body: &T,
    ) -> GatewayResult<HttpReply> {
        self.send(url, self.client.post(url.as_str()).json(body))
            .await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// A request observed by the fake backend.
    #[derive(Debug, Clone, PartialEq)]
    pub struct SeenRequest {
        pub method: &'static str,
        pub url: String,
        pub body: Option<serde_json::Value>,
    }

    /// A fake HTTP backend that returns canned replies keyed by URL substring.
    ///
    /// Unknown URLs fail as a network error.
    #[derive(Default)]
    pub struct FakeBackend {
        replies: Vec<(String, HttpReply)>,
        seen: Mutex<Vec<SeenRequest>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer URLs containing `url_contains` with `status` and `body`.
        pub fn with_reply(mut self, url_contains: &str, status: u16, body: &str) -> Self {
            self.replies.push((
                url_contains.to_string(),
                HttpReply {
                    status,
                    body: body.to_string(),
                },
            ));
            self
        }

        pub fn seen(&self) -> Vec<SeenRequest> {
            self.seen.lock().unwrap().clone()
        }

        fn answer(&self, request: SeenRequest) -> GatewayResult<HttpReply> {
            let url = request.url.clone();
            self.seen.lock().unwrap().push(request);
            self.replies
                .iter()
                .find(|(pattern, _)| url.contains(pattern.as_str()))
                .map(|(_, reply)| reply.clone())
                .ok_or_else(|| GatewayError::Network {
                    url: url.clone(),
                    message: "connection refused".to_string(),
                })
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get(&self, url: &Url) -> GatewayResult<HttpReply> {
            self.answer(SeenRequest {
                method: "GET",
                url: url.to_string(),
                body: None,
            })
        }

        async fn post_json<T: Serialize + Sync>(
            &self,
            url: &Url,
            body: &T,
        ) -> GatewayResult<HttpReply> {
            self.answer(SeenRequest {
                method: "POST",
                url: url.to_string(),
                body: serde_json::to_value(body).ok(),
            })
        }
    }
}
