//! Read-only contract call port.

use alloy_primitives::{Address, Bytes, hex};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single `eth_call`.
///
/// A revert is kept apart from transport failures because its payload may be
/// a structured redirect.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CallError {
    /// Execution reverted. `data` is the raw revert payload when the node returned one.
    #[error("execution reverted{}", .data.as_ref().map_or_else(String::new, |d| format!(": {}", hex::encode_prefixed(d))))]
    Reverted {
        /// Raw revert payload
        data: Option<Bytes>,
    },

    /// The RPC transport failed before execution produced a result.
    #[error("transport failure: {message}")]
    Transport {
        /// Description of the failure
        message: String,
    },
}

/// Port trait for read-only contract calls.
///
/// # Design
///
/// - One method: `eth_call` against the latest state
/// - Implementations live in adapter crates (`ensgate-rpc`) or tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Execute `data` against contract `to` without a transaction.
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, CallError>;
}
