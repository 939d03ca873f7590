//! Interpretation of `eth_call` responses.

use alloy_primitives::{Bytes, hex};
use serde_json::Value;

use crate::error::{RpcError, RpcResult};
use crate::models::{JsonRpcErrorObject, JsonRpcResponse};

/// Turn a raw response body into return data or a classified failure.
pub fn parse_call_response(body: &str) -> RpcResult<Bytes> {
    let response: JsonRpcResponse =
        serde_json::from_str(body).map_err(|e| RpcError::InvalidResponse {
            message: e.to_string(),
        })?;

    if let Some(error) = response.error {
        return Err(classify_error(error));
    }

    let result = response.result.ok_or_else(|| RpcError::InvalidResponse {
        message: "response has neither result nor error".to_string(),
    })?;
    decode_hex(&result)
}

/// Decide whether a JSON-RPC error is a revert.
///
/// Hex `data` means a revert with payload. A message mentioning a revert with
/// no usable data is a revert without payload. Everything else is a node error.
fn classify_error(error: JsonRpcErrorObject) -> RpcError {
    if let Some(data) = error.data.as_ref().and_then(revert_data) {
        return RpcError::Reverted { data: Some(data) };
    }

    if error.message.to_ascii_lowercase().contains("revert") {
        return RpcError::Reverted { data: None };
    }

    RpcError::Rpc {
        code: error.code,
        message: error.message,
    }
}

fn revert_data(value: &Value) -> Option<Bytes> {
    match value {
        Value::String(s) if s.starts_with("0x") => hex::decode(s).ok().map(Bytes::from),
        Value::Object(map) => map.get("data").and_then(revert_data),
        _ => None,
    }
}

fn decode_hex(value: &str) -> RpcResult<Bytes> {
    hex::decode(value)
        .map(Bytes::from)
        .map_err(|e| RpcError::InvalidResponse {
            message: format!("result is not hex: {e}"),
        })
}
