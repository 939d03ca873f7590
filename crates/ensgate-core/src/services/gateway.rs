//! Gateway fetch with ordered URL fallback.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{GatewayResponse, RedirectDescriptor};
use crate::error::{ResolveError, ResolveResult};
use crate::ports::{GatewayPort, GatewayRequest};

/// Fetches the off-chain answer for a redirect descriptor.
///
/// URLs are tried in descriptor order and the first success wins. Any
/// gateway-layer failure moves on to the next URL; once the list is exhausted
/// the last failure is returned. Each attempt is bounded by `timeout`, and
/// dropping the returned future cancels the attempt in flight.
pub struct GatewayFetcher {
    port: Arc<dyn GatewayPort>,
    timeout: Duration,
}

impl GatewayFetcher {
    /// Create a fetcher over the given gateway port.
    pub fn new(port: Arc<dyn GatewayPort>, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    /// Fetch the payload for `descriptor`.
    pub async fn fetch(&self, descriptor: &RedirectDescriptor) -> ResolveResult<GatewayResponse> {
        let mut last_error = None;

        for template in &descriptor.urls {
            let request = GatewayRequest {
                url_template: template.clone(),
                sender: descriptor.sender,
                call_data: descriptor.call_data.clone(),
            };

            debug!("Querying gateway {template} for {}", descriptor.sender);
            let error = match tokio::time::timeout(self.timeout, self.port.fetch(&request)).await {
                Ok(Ok(response)) => {
                    debug!("Gateway {template} answered with {} bytes", response.data.len());
                    return Ok(response);
                }
                Ok(Err(err)) => ResolveError::from(err),
                Err(_) => ResolveError::GatewayTimeout {
                    url: template.clone(),
                },
            };

            warn!("Gateway attempt failed, trying next URL: {error}");
            last_error = Some(error);
        }

        Err(last_error.unwrap_or_else(|| ResolveError::RedirectDescriptorMalformed {
            reason: "descriptor lists no gateway URLs".to_string(),
        }))
    }
}
