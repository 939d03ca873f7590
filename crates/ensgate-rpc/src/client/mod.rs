//! JSON-RPC client issuing `eth_call`.

use std::sync::atomic::{AtomicU64, Ordering};

use alloy_primitives::{Address, Bytes, hex};
use tracing::debug;
use url::Url;

use crate::config::RpcClientConfig;
use crate::error::{RpcError, RpcResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{CallParams, EthCallRequest};
use crate::parsing::parse_call_response;

/// Default JSON-RPC client using the reqwest HTTP backend.
pub type DefaultRpcClient = RpcClient<ReqwestBackend>;

/// JSON-RPC client, generic over its HTTP backend.
pub struct RpcClient<B: HttpBackend> {
    pub(crate) backend: B,
    endpoint: Url,
    block_tag: String,
    next_id: AtomicU64,
}

impl DefaultRpcClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &RpcClientConfig) -> RpcResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Self::with_backend(config, backend)
    }
}

impl<B: HttpBackend> RpcClient<B> {
    /// Create a client over an explicit backend.
    pub(crate) fn with_backend(config: &RpcClientConfig, backend: B) -> RpcResult<Self> {
        Ok(Self {
            backend,
            endpoint: Url::parse(&config.endpoint)?,
            block_tag: config.block_tag.clone(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Execute `eth_call` against `to` with `data`.
    pub(crate) async fn eth_call(&self, to: Address, data: &Bytes) -> RpcResult<Bytes> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = EthCallRequest::new(
            id,
            CallParams {
                to: hex::encode_prefixed(to),
                data: hex::encode_prefixed(data),
            },
            &self.block_tag,
        );

        debug!("eth_call #{id} to {to} ({} bytes)", data.len());
        let reply = self.backend.post_json(&self.endpoint, &request).await?;

        if !(200..300).contains(&reply.status) {
            return Err(RpcError::HttpStatus {
                status: reply.status,
            });
        }

        let result = parse_call_response(&reply.body);
        if let Err(RpcError::Reverted { data }) = &result {
            debug!(
                "eth_call #{id} reverted with {} bytes of data",
                data.as_ref().map_or(0, |d| d.len())
            );
        }
        result
    }
}
