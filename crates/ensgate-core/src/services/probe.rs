//! Resolver capability probing (ERC-165 `supportsInterface`).

use std::sync::Arc;

use alloy_primitives::{Address, Selector};
use tracing::debug;

use super::read_contract;
use crate::abi::supportsInterfaceCall;
use crate::error::{ResolveError, ResolveResult};
use crate::ports::ChainReader;

/// Asks a resolver whether it implements a selector-keyed capability.
pub struct InterfaceProbe {
    chain: Arc<dyn ChainReader>,
}

impl InterfaceProbe {
    /// Create a probe over the given chain handle.
    pub fn new(chain: Arc<dyn ChainReader>) -> Self {
        Self { chain }
    }

    /// `Ok(false)` means the resolver answered "no". A resolver that cannot
    /// answer at all is [`ResolveError::CapabilityProbeFailed`].
    pub async fn supports(&self, resolver: Address, selector: Selector) -> ResolveResult<bool> {
        let call = supportsInterfaceCall {
            interfaceID: selector,
        };
        let supported = read_contract(self.chain.as_ref(), resolver, &call)
            .await
            .map_err(|e| ResolveError::CapabilityProbeFailed {
                resolver,
                selector,
                message: e.to_string(),
            })?;

        debug!("Resolver {resolver} supports {selector}: {supported}");
        Ok(supported)
    }
}
