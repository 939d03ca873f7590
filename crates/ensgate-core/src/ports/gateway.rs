//! Off-chain gateway port.

use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::GatewayResponse;

/// One gateway attempt: a single URL template plus the values to substitute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayRequest {
    /// URL template, possibly containing `{sender}` and `{data}`
    pub url_template: String,
    /// Contract that issued the redirect
    pub sender: Address,
    /// Call data the gateway should answer
    pub call_data: Bytes,
}

/// Errors from a single gateway attempt.
///
/// Adapters map transport-specific failures onto these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayPortError {
    /// Network failure before a response arrived.
    #[error("gateway unreachable at {url}: {message}")]
    Unreachable {
        /// Expanded URL
        url: String,
        /// Description of the failure
        message: String,
    },

    /// The gateway answered with a non-success status.
    #[error("gateway at {url} returned status {status}")]
    HttpStatus {
        /// Expanded URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The body was not JSON or lacked a hex `data` field.
    #[error("malformed gateway response from {url}: {message}")]
    MalformedResponse {
        /// Expanded URL
        url: String,
        /// What was wrong
        message: String,
    },

    /// The request exceeded the adapter's timeout.
    #[error("gateway at {url} timed out")]
    Timeout {
        /// Expanded URL
        url: String,
    },

    /// The expanded template is not a valid URL.
    #[error("invalid gateway URL '{url}': {message}")]
    InvalidUrl {
        /// Expanded text
        url: String,
        /// Parser message
        message: String,
    },
}

/// Port trait for fetching a gateway answer for one URL template.
///
/// Fallback across a descriptor's URL list is policy and lives in
/// [`crate::services::GatewayFetcher`], not in implementations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GatewayPort: Send + Sync {
    /// Expand the template, perform the request and parse the payload.
    async fn fetch(&self, request: &GatewayRequest) -> Result<GatewayResponse, GatewayPortError>;
}
