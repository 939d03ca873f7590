//! Public configuration for the gateway client.

use std::time::Duration;

/// Configuration for the gateway client.
///
/// # Example
///
/// ```
/// use ensgate_gateway::GatewayClientConfig;
/// use std::time::Duration;
///
/// let config = GatewayClientConfig::new()
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct GatewayClientConfig {
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout enforced by the HTTP client
    pub(crate) timeout: Duration,
}

impl Default for GatewayClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("ensgate-gateway/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl GatewayClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
