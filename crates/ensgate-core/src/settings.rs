//! Resolution settings.
//!
//! Use the builder methods to customize; every field has a sensible default
//! for Ethereum mainnet.

use std::time::Duration;

use alloy_primitives::{Address, address};

/// Registry contract on Ethereum mainnet.
pub const MAINNET_REGISTRY: Address = address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e");

/// Default bound on a single gateway attempt.
pub const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(10);

/// Default limit on redirect hops during verification.
pub const DEFAULT_MAX_REDIRECTS: u8 = 4;

/// Whether to ask resolvers `supportsInterface` before reading a record.
///
/// Some legacy resolvers never implemented the capability test; for those the
/// probe must be skipped rather than treated as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbePolicy {
    /// Probe before every record read.
    #[default]
    Probe,
    /// Read records directly.
    Skip,
}

/// Settings for [`crate::NameResolver`].
///
/// # Example
///
/// ```
/// use ensgate_core::{ProbePolicy, ResolverSettings};
/// use std::time::Duration;
///
/// let settings = ResolverSettings::new()
///     .with_probe_policy(ProbePolicy::Skip)
///     .with_gateway_timeout(Duration::from_secs(5));
/// assert_eq!(settings.probe_policy(), ProbePolicy::Skip);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    registry: Address,
    probe_policy: ProbePolicy,
    verify_reverse: bool,
    gateway_timeout: Duration,
    max_redirects: u8,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            registry: MAINNET_REGISTRY,
            probe_policy: ProbePolicy::Probe,
            verify_reverse: true,
            gateway_timeout: DEFAULT_GATEWAY_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl ResolverSettings {
    /// Create settings with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registry contract address.
    #[must_use]
    pub const fn with_registry(mut self, registry: Address) -> Self {
        self.registry = registry;
        self
    }

    /// Set the capability probe policy.
    #[must_use]
    pub const fn with_probe_policy(mut self, policy: ProbePolicy) -> Self {
        self.probe_policy = policy;
        self
    }

    /// Require reverse names to resolve back to the queried address.
    ///
    /// Defaults to `true`.
    #[must_use]
    pub const fn with_verify_reverse(mut self, verify: bool) -> Self {
        self.verify_reverse = verify;
        self
    }

    /// Bound each gateway attempt.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_gateway_timeout(mut self, timeout: Duration) -> Self {
        self.gateway_timeout = timeout;
        self
    }

    /// Limit redirect hops. Values below 1 are raised to 1.
    ///
    /// Defaults to 4.
    #[must_use]
    pub fn with_max_redirects(mut self, max: u8) -> Self {
        self.max_redirects = max.max(1);
        self
    }

    pub const fn registry(&self) -> Address {
        self.registry
    }

    pub const fn probe_policy(&self) -> ProbePolicy {
        self.probe_policy
    }

    pub const fn verify_reverse(&self) -> bool {
        self.verify_reverse
    }

    pub const fn gateway_timeout(&self) -> Duration {
        self.gateway_timeout
    }

    pub const fn max_redirects(&self) -> u8 {
        self.max_redirects
    }
}
