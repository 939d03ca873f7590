//! Internal error types for JSON-RPC calls.
//!
//! Mapped to [`ensgate_core::CallError`] at the port boundary.

use alloy_primitives::Bytes;
use thiserror::Error;

/// Result type alias for JSON-RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;

/// Errors related to JSON-RPC calls.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The call reverted. The payload is kept verbatim.
    #[error("execution reverted")]
    Reverted {
        /// Revert data, when the node returned any
        data: Option<Bytes>,
    },

    /// The node returned a JSON-RPC error that is not a revert.
    #[error("JSON-RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Error message from the node
        message: String,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("JSON-RPC request failed with status {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// The request did not complete within the configured timeout.
    #[error("JSON-RPC request timed out")]
    Timeout,

    /// Connection, TLS or body transfer failure.
    #[error("Network error: {message}")]
    Network {
        /// Underlying error description
        message: String,
    },

    /// The node's answer is not a valid JSON-RPC response.
    #[error("Invalid JSON-RPC response: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The configured endpoint is not a URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
