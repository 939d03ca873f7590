//! Public configuration for the JSON-RPC client.

use std::time::Duration;

/// Configuration for the JSON-RPC client.
///
/// # Example
///
/// ```
/// use ensgate_rpc::RpcClientConfig;
/// use std::time::Duration;
///
/// let config = RpcClientConfig::new()
///     .with_endpoint("https://eth.example/rpc")
///     .with_block_tag("finalized")
///     .with_timeout(Duration::from_secs(20));
/// ```
#[derive(Debug, Clone)]
pub struct RpcClientConfig {
    /// JSON-RPC endpoint URL
    pub(crate) endpoint: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Block tag passed to every `eth_call`
    pub(crate) block_tag: String,
}

impl Default for RpcClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8545".to_string(),
            user_agent: concat!("ensgate-rpc/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            block_tag: "latest".to_string(),
        }
    }
}

impl RpcClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON-RPC endpoint.
    ///
    /// Defaults to `http://127.0.0.1:8545`.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the block tag (`latest`, `finalized`, or a hex block number).
    #[must_use]
    pub fn with_block_tag(mut self, tag: impl Into<String>) -> Self {
        self.block_tag = tag.into();
        self
    }
}
