//! Port trait implementation for `RpcClient`.

use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use ensgate_core::{CallError, ChainReader};

use crate::client::RpcClient;
use crate::error::RpcError;
use crate::http::HttpBackend;

/// Map internal JSON-RPC errors to call errors.
///
/// Only reverts keep their identity; everything else is transport.
fn map_error(error: RpcError) -> CallError {
    match error {
        RpcError::Reverted { data } => CallError::Reverted { data },
        other => CallError::Transport {
            message: other.to_string(),
        },
    }
}

#[async_trait]
impl<B: HttpBackend> ChainReader for RpcClient<B> {
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, CallError> {
        self.eth_call(to, &data).await.map_err(map_error)
    }
}
