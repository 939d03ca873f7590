//! Gateway client: expand, request, check status, parse.

use alloy_primitives::Bytes;
use ensgate_core::GatewayRequest;
use tracing::debug;

use crate::config::GatewayClientConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::PreparedRequest;
use crate::parsing::parse_gateway_body;
use crate::url::expand;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default gateway client using the reqwest HTTP backend.
pub type DefaultGatewayClient = GatewayClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for EIP-3668 gateways.
///
/// Generic over an HTTP backend so tests can inject a fake. External code
/// should use `DefaultGatewayClient::new()`.
pub struct GatewayClient<B: HttpBackend> {
    pub(crate) backend: B,
}

impl DefaultGatewayClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &GatewayClientConfig) -> GatewayResult<Self> {
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
        })
    }
}

impl<B: HttpBackend> GatewayClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Perform one gateway attempt and return the payload.
    pub(crate) async fn fetch_payload(&self, request: &GatewayRequest) -> GatewayResult<Bytes> {
        let prepared = expand(request)?;
        let url = prepared.url().clone();

        let reply = match &prepared {
            PreparedRequest::Get(url) => {
                debug!("GET {url}");
                self.backend.get(url).await?
            }
            PreparedRequest::Post(url, body) => {
                debug!("POST {url}");
                self.backend.post_json(url, body).await?
            }
        };

        if !reply.is_success() {
            return Err(GatewayError::HttpStatus {
                status: reply.status,
                url: url.to_string(),
            });
        }

        let payload = parse_gateway_body(url.as_str(), &reply.body)?;
        debug!("Gateway {url} returned {} bytes", payload.len());
        Ok(payload)
    }
}
