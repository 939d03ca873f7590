//! Port trait implementation for `GatewayClient`.
//!
//! Implements the core-owned `GatewayPort` trait and maps internal errors to
//! `GatewayPortError` at the boundary.

use async_trait::async_trait;
use ensgate_core::{GatewayPort, GatewayPortError, GatewayRequest, GatewayResponse};

use crate::client::GatewayClient;
use crate::error::GatewayError;
use crate::http::HttpBackend;

/// Map internal gateway errors to port errors.
fn map_error(error: GatewayError) -> GatewayPortError {
    match error {
        GatewayError::HttpStatus { status, url } => GatewayPortError::HttpStatus { url, status },
        GatewayError::Timeout { url } => GatewayPortError::Timeout { url },
        GatewayError::Network { url, message } => GatewayPortError::Unreachable { url, message },
        GatewayError::InvalidUrl { url, source } => GatewayPortError::InvalidUrl {
            url,
            message: source.to_string(),
        },
        GatewayError::InvalidResponse { url, message } => {
            GatewayPortError::MalformedResponse { url, message }
        }
        GatewayError::ClientBuild(e) => GatewayPortError::Unreachable {
            url: String::new(),
            message: e.to_string(),
        },
    }
}

#[async_trait]
impl<B: HttpBackend> GatewayPort for GatewayClient<B> {
    async fn fetch(&self, request: &GatewayRequest) -> Result<GatewayResponse, GatewayPortError> {
        self.fetch_payload(request)
            .await
            .map(|data| GatewayResponse { data })
            .map_err(map_error)
    }
}
