//! HTTP transport for JSON-RPC.
//!
//! Only `POST` with a JSON body is needed. The trait keeps the client testable
//! without a node.

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::config::RpcClientConfig;
use crate::error::{RpcError, RpcResult};

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Trait for HTTP backends that can post JSON-RPC requests.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// `POST` a JSON body and return the raw reply.
    async fn post_json<T: Serialize + Sync>(&self, url: &Url, body: &T) -> RpcResult<HttpReply>;
}

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &RpcClientConfig) -> RpcResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(RpcError::ClientBuild)?;

        Ok(Self { client })
    }
}

fn transport_error(error: &reqwest::Error) -> RpcError {
    if error.is_timeout() {
        RpcError::Timeout
    } else {
        RpcError::Network {
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json<T: Serialize + Sync>(&self, url: &Url, body: &T) -> RpcResult<HttpReply> {
        let response = self
            .client
            .post(url.as_str())
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| transport_error(&e))?;
        Ok(HttpReply { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A fake backend that replays queued replies in order and records bodies.
    ///
    /// An empty queue fails as a network error.
    #[derive(Default)]
    pub struct FakeBackend {
        replies: Mutex<VecDeque<HttpReply>>,
        bodies: Mutex<Vec<serde_json::Value>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a reply.
        pub fn with_reply(self, status: u16, body: &str) -> Self {
            self.replies.lock().unwrap().push_back(HttpReply {
                status,
                body: body.to_string(),
            });
            self
        }

        /// JSON bodies posted so far.
        pub fn bodies(&self) -> Vec<serde_json::Value> {
            self.bodies.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn post_json<T: Serialize + Sync>(
            &self,
            _url: &Url,
            body: &T,
        ) -> RpcResult<HttpReply> {
            if let Ok(value) = serde_json::to_value(body) {
                self.bodies.lock().unwrap().push(value);
            }
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| RpcError::Network {
                    message: "connection refused".to_string(),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_backend_creation() {
        assert!(ReqwestBackend::new(&RpcClientConfig::new()).is_ok());
    }

    #[tokio::test]
    async fn test_fake_backend_replays_in_order() {
        let backend = testing::FakeBackend::new()
            .with_reply(200, "first")
            .with_reply(500, "second");
        let url = Url::parse("http://127.0.0.1:8545").unwrap();

        let first = backend.post_json(&url, &1).await.unwrap();
        let second = backend.post_json(&url, &2).await.unwrap();
        assert_eq!((first.status, first.body.as_str()), (200, "first"));
        assert_eq!((second.status, second.body.as_str()), (500, "second"));
        tokio_test::assert_err!(backend.post_json(&url, &3).await);
        assert_eq!(backend.bodies().len(), 3);
    }
}
