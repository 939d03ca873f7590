//! JSON-RPC wire types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `eth_call` transaction object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallParams {
    /// Contract address as `0x` hex
    pub to: String,
    /// Calldata as `0x` hex
    pub data: String,
}

/// A JSON-RPC 2.0 request for `eth_call`.
#[derive(Debug, Clone, Serialize)]
pub struct EthCallRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: (CallParams, &'a str),
}

impl<'a> EthCallRequest<'a> {
    pub const fn new(id: u64, call: CallParams, block_tag: &'a str) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method: "eth_call",
            params: (call, block_tag),
        }
    }
}

/// A JSON-RPC 2.0 response. Exactly one of `result` and `error` is expected.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

/// The `error` member of a JSON-RPC response.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    /// Revert data. Nodes disagree on the shape: a hex string, or an object
    /// wrapping one under `data`.
    #[serde(default)]
    pub data: Option<Value>,
}
