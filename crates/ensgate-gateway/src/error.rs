//! Error types for gateway requests.
//!
//! Per-request errors are mapped to [`ensgate_core::GatewayPortError`] at the
//! port boundary; only client construction surfaces this type directly.

use thiserror::Error;

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors related to gateway requests.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway answered with a non-success status.
    #[error("Gateway request failed with status {status}: {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Gateway request timed out: {url}")]
    Timeout {
        /// The URL that was requested
        url: String,
    },

    /// Connection, TLS or body transfer failure.
    #[error("Network error for {url}: {message}")]
    Network {
        /// The URL that was requested
        url: String,
        /// Underlying error description
        message: String,
    },

    /// The expanded template does not parse as a URL.
    #[error("Invalid gateway URL '{url}': {source}")]
    InvalidUrl {
        /// The expanded template
        url: String,
        /// Parse failure
        #[source]
        source: url::ParseError,
    },

    /// The body is not the expected JSON shape.
    #[error("Invalid response from {url}: {message}")]
    InvalidResponse {
        /// The URL that was requested
        url: String,
        /// Description of what was invalid
        message: String,
    },

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_error_message() {
        let error = GatewayError::HttpStatus {
            status: 502,
            url: "https://gw.example/lookup".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("gw.example"));
    }

    #[test]
    fn test_invalid_url_keeps_source() {
        let source = url::Url::parse("not a url").unwrap_err();
        let error = GatewayError::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().contains("not a url"));
    }

    #[test]
    fn test_invalid_response_error_message() {
        let error = GatewayError::InvalidResponse {
            url: "https://gw.example/".to_string(),
            message: "missing field `data`".to_string(),
        };
        assert!(error.to_string().contains("missing field"));
    }
}
