//! Resolution services - orchestrate ports and domain logic.
//!
//! Each service holds explicit handles to the ports it needs. There is no
//! shared mutable state, so independent requests can run concurrently.

mod gateway;
mod probe;
mod registry;
mod resolver;
mod verifier;

#[cfg(test)]
pub(crate) mod testing;

pub use gateway::GatewayFetcher;
pub use probe::InterfaceProbe;
pub use registry::{RegistryLookup, ResolverHit, Target};
pub use resolver::NameResolver;
pub use verifier::{PendingLookup, ProofVerifier, VerifyOutcome, decode_wrapped};

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolCall;

use crate::error::{ResolveError, ResolveResult};
use crate::ports::ChainReader;

/// Encode `call`, execute it against `to` and decode the typed return.
pub(crate) async fn read_contract<C: SolCall + Sync>(
    chain: &dyn ChainReader,
    to: Address,
    call: &C,
) -> ResolveResult<C::Return> {
    let raw = chain.call(to, Bytes::from(call.abi_encode())).await?;
    C::abi_decode_returns(&raw).map_err(|e| ResolveError::ResultDecodeError {
        message: format!("{}: {e}", C::SIGNATURE),
    })
}
