//! CLI error types and exit codes.
//!
//! Resolution errors are folded into a handful of categories that map onto
//! sysexits-style exit codes.

use ensgate_core::ResolveError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The lookup completed but found nothing.
    #[error("{0}")]
    NoResult(String),

    /// Argument error (bad name, bad address).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The chain node or every gateway was unavailable.
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// A contract or gateway returned data that failed verification or decoding.
    #[error("Resolution failed: {0}")]
    Resolution(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// - 1: no result
    /// - 2: invalid arguments
    /// - 64-78: see sysexits.h
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NoResult(_) => 1,
            Self::Arguments(_) => 2,
            Self::Resolution(_) => 65,  // EX_DATAERR
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::InvalidName { .. } | ResolveError::InvalidSignature { .. } => {
                Self::Arguments(err.to_string())
            }
            ResolveError::Transport { .. }
            | ResolveError::GatewayUnreachable { .. }
            | ResolveError::GatewayHttpError { .. }
            | ResolveError::GatewayMalformedResponse { .. }
            | ResolveError::GatewayTimeout { .. } => Self::Unavailable(err.to_string()),
            ResolveError::CapabilityProbeFailed { .. }
            | ResolveError::UnexpectedRevert { .. }
            | ResolveError::RedirectDescriptorMalformed { .. }
            | ResolveError::ProofRejected { .. }
            | ResolveError::ResultDecodeError { .. }
            | ResolveError::TooManyRedirects { .. } => Self::Resolution(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::NoResult(String::new()).exit_code(), 1);
        assert_eq!(CliError::Arguments(String::new()).exit_code(), 2);
        assert_eq!(CliError::Resolution(String::new()).exit_code(), 65);
        assert_eq!(CliError::Unavailable(String::new()).exit_code(), 69);
        assert_eq!(CliError::Config(String::new()).exit_code(), 78);
    }

    #[test]
    fn test_resolve_error_mapping() {
        let invalid = CliError::from(ResolveError::InvalidName {
            name: "Nick.eth".to_string(),
            reason: "not normalized".to_string(),
        });
        assert!(matches!(invalid, CliError::Arguments(_)));

        let timeout = CliError::from(ResolveError::GatewayTimeout {
            url: "https://gw.example/".to_string(),
        });
        assert!(matches!(timeout, CliError::Unavailable(_)));

        let redirects = CliError::from(ResolveError::TooManyRedirects { limit: 4 });
        assert!(matches!(redirects, CliError::Resolution(_)));
    }
}
