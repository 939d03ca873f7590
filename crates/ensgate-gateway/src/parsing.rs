//! Gateway response body parsing.

use alloy_primitives::{Bytes, hex};

use crate::error::{GatewayError, GatewayResult};
use crate::models::GatewayBody;

/// Parse a gateway body into its payload bytes.
///
/// The body must be a JSON object with a hex string `data` field.
pub fn parse_gateway_body(url: &str, body: &str) -> GatewayResult<Bytes> {
    let parsed: GatewayBody =
        serde_json::from_str(body).map_err(|e| GatewayError::InvalidResponse {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    hex::decode(parsed.data.trim())
        .map(Bytes::from)
        .map_err(|e| GatewayError::InvalidResponse {
            url: url.to_string(),
            message: format!("`data` is not hex: {e}"),
        })
}
