//! Error taxonomy for name resolution.
//!
//! Every fault a resolution can hit has its own variant so callers can decide
//! whether to retry, fall back to another gateway, or abort. Expected absences
//! (no resolver, unsupported capability, no reverse record) are not errors;
//! they are reported through [`crate::Lookup::Absent`].

use alloy_primitives::{Address, Bytes, Selector, hex};
use thiserror::Error;

use crate::ports::{CallError, GatewayPortError};

/// Result type alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors surfaced by the resolution services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The name was not pre-normalized or cannot be encoded.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName {
        /// The rejected input
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// A function signature is not of the form `name(type,...)`.
    #[error("Invalid function signature: '{signature}'")]
    InvalidSignature {
        /// The rejected signature text
        signature: String,
    },

    /// The capability test itself failed, as opposed to answering `false`.
    #[error("Capability probe for {selector} on resolver {resolver} failed: {message}")]
    CapabilityProbeFailed {
        /// Resolver that was probed
        resolver: Address,
        /// Capability that was asked about
        selector: Selector,
        /// Underlying failure
        message: String,
    },

    /// A contract call reverted with something other than a redirect.
    #[error("Contract call reverted unexpectedly{}", format_revert_data(.data.as_ref()))]
    UnexpectedRevert {
        /// Raw revert payload, if the node returned one
        data: Option<Bytes>,
    },

    /// The revert carried the redirect discriminator but its body is unusable.
    #[error("Malformed redirect descriptor: {reason}")]
    RedirectDescriptorMalformed {
        /// What was wrong with the descriptor
        reason: String,
    },

    /// The gateway could not be reached at all.
    #[error("Gateway {url} unreachable: {message}")]
    GatewayUnreachable {
        /// The expanded gateway URL
        url: String,
        /// Underlying network failure
        message: String,
    },

    /// The gateway answered with a non-success status.
    #[error("Gateway {url} returned HTTP status {status}")]
    GatewayHttpError {
        /// The expanded gateway URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The gateway body did not parse or lacked the `data` field.
    #[error("Gateway {url} returned a malformed response: {message}")]
    GatewayMalformedResponse {
        /// The expanded gateway URL
        url: String,
        /// What was wrong with the body
        message: String,
    },

    /// The gateway did not answer within the configured timeout.
    #[error("Gateway {url} timed out")]
    GatewayTimeout {
        /// The expanded gateway URL
        url: String,
    },

    /// The resolver refused the gateway payload during verification.
    #[error("Proof rejected by {sender}{}", format_revert_data(.data.as_ref()))]
    ProofRejected {
        /// Contract that performed the verification
        sender: Address,
        /// Raw revert payload, if any
        data: Option<Bytes>,
    },

    /// Returned bytes do not match the expected return shape.
    #[error("Failed to decode result: {message}")]
    ResultDecodeError {
        /// Decoder message, prefixed with the expected signature
        message: String,
    },

    /// Verification kept redirecting past the configured hop limit.
    #[error("Too many redirects (limit {limit})")]
    TooManyRedirects {
        /// The configured hop limit
        limit: u8,
    },

    /// The chain RPC transport failed.
    #[error("Chain transport error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
    },
}

fn format_revert_data(data: Option<&Bytes>) -> String {
    data.map_or_else(String::new, |data| format!(" (data {})", hex::encode_prefixed(data)))
}

impl ResolveError {
    /// Whether trying the next gateway URL can help.
    ///
    /// Verification failures never qualify: the same payload fails at every gateway.
    pub const fn is_gateway_failure(&self) -> bool {
        matches!(
            self,
            Self::GatewayUnreachable { .. }
                | Self::GatewayHttpError { .. }
                | Self::GatewayMalformedResponse { .. }
                | Self::GatewayTimeout { .. }
        )
    }

    /// Whether repeating the whole request later may succeed.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::GatewayUnreachable { .. } | Self::GatewayTimeout { .. } => {
                true
            }
            Self::GatewayHttpError { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<CallError> for ResolveError {
    fn from(err: CallError) -> Self {
        match err {
            CallError::Reverted { data } => Self::UnexpectedRevert { data },
            CallError::Transport { message } => Self::Transport { message },
        }
    }
}

impl From<GatewayPortError> for ResolveError {
    fn from(err: GatewayPortError) -> Self {
        match err {
            GatewayPortError::Unreachable { url, message } => {
                Self::GatewayUnreachable { url, message }
            }
            GatewayPortError::HttpStatus { url, status } => Self::GatewayHttpError { url, status },
            GatewayPortError::MalformedResponse { url, message } => {
                Self::GatewayMalformedResponse { url, message }
            }
            GatewayPortError::Timeout { url } => Self::GatewayTimeout { url },
            GatewayPortError::InvalidUrl { url, message } => Self::GatewayUnreachable {
                url,
                message: format!("invalid gateway URL: {message}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::bytes;

    #[test]
    fn test_gateway_failures_allow_fallback() {
        let url = "https://gw.example/x".to_string();
        assert!(
            ResolveError::GatewayHttpError {
                url: url.clone(),
                status: 500
            }
            .is_gateway_failure()
        );
        assert!(ResolveError::GatewayTimeout { url }.is_gateway_failure());
        assert!(
            !ResolveError::ProofRejected {
                sender: Address::ZERO,
                data: None
            }
            .is_gateway_failure()
        );
    }

    #[test]
    fn test_retryable_classification() {
        assert!(
            ResolveError::Transport {
                message: "connection reset".to_string()
            }
            .is_retryable()
        );
        assert!(
            ResolveError::GatewayHttpError {
                url: String::new(),
                status: 503
            }
            .is_retryable()
        );
        assert!(
            !ResolveError::GatewayHttpError {
                url: String::new(),
                status: 404
            }
            .is_retryable()
        );
        assert!(
            !ResolveError::RedirectDescriptorMalformed {
                reason: "empty".to_string()
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_call_error_mapping() {
        let err: ResolveError = CallError::Reverted {
            data: Some(bytes!("deadbeef")),
        }
        .into();
        assert_eq!(
            err,
            ResolveError::UnexpectedRevert {
                data: Some(bytes!("deadbeef"))
            }
        );
        assert!(err.to_string().contains("0xdeadbeef"));
    }

    #[test]
    fn test_invalid_gateway_url_maps_to_unreachable() {
        let err: ResolveError = GatewayPortError::InvalidUrl {
            url: "not a url".to_string(),
            message: "relative URL without a base".to_string(),
        }
        .into();
        assert!(matches!(err, ResolveError::GatewayUnreachable { .. }));
    }
}
