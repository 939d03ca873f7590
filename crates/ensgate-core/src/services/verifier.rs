//! Proof verification: hand the gateway payload back to the resolver.
//!
//! The callback returns an opaque `bytes` blob. It is decoded against the
//! return type of the *original* query, which [`PendingLookup`] carries as a
//! type parameter so a payload can never be checked against the wrong call.

use std::sync::Arc;

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::{SolCall, SolValue};
use tracing::{debug, warn};

use crate::abi::resolveCall;
use crate::domain::{CallOutcome, GatewayResponse, RedirectDescriptor, classify};
use crate::error::{ResolveError, ResolveResult};
use crate::ports::ChainReader;

/// A redirect descriptor paired with the query it answers.
#[derive(Debug, Clone)]
pub struct PendingLookup<C> {
    call: C,
    descriptor: RedirectDescriptor,
}

impl<C: SolCall> PendingLookup<C> {
    /// Pair `descriptor`, raised by contract `origin`, with `call`.
    ///
    /// A descriptor naming a different sender than the contract that raised
    /// it is rejected (EIP-3668).
    pub fn new(call: C, origin: Address, descriptor: RedirectDescriptor) -> ResolveResult<Self> {
        check_sender(origin, &descriptor)?;
        Ok(Self { call, descriptor })
    }

    /// Follow a nested redirect raised by the current sender.
    pub fn redirect(self, descriptor: RedirectDescriptor) -> ResolveResult<Self> {
        check_sender(self.descriptor.sender, &descriptor)?;
        Ok(Self {
            call: self.call,
            descriptor,
        })
    }

    pub const fn call(&self) -> &C {
        &self.call
    }

    pub const fn descriptor(&self) -> &RedirectDescriptor {
        &self.descriptor
    }
}

fn check_sender(origin: Address, descriptor: &RedirectDescriptor) -> ResolveResult<()> {
    if descriptor.sender == origin {
        Ok(())
    } else {
        Err(ResolveError::RedirectDescriptorMalformed {
            reason: format!(
                "sender {} does not match calling contract {origin}",
                descriptor.sender
            ),
        })
    }
}

/// Result of one verification call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome<T> {
    /// The resolver accepted the payload and returned the final value.
    Verified(T),
    /// The resolver asked for another off-chain round.
    RedirectRequested(RedirectDescriptor),
}

/// Calldata for the descriptor's callback: `callback ‖ abi(response, extraData)`.
pub fn callback_data(descriptor: &RedirectDescriptor, response: &GatewayResponse) -> Bytes {
    let mut data = descriptor.callback.to_vec();
    data.extend_from_slice(
        &(response.data.clone(), descriptor.extra_data.clone()).abi_encode_params(),
    );
    Bytes::from(data)
}

/// Unwrap a `bytes` return and decode it as `C`'s return type.
pub fn decode_wrapped<C: SolCall>(raw: &[u8]) -> ResolveResult<C::Return> {
    let inner = resolveCall::abi_decode_returns(raw).map_err(|e| {
        ResolveError::ResultDecodeError {
            message: format!("expected bytes wrapper: {e}"),
        }
    })?;
    C::abi_decode_returns(&inner).map_err(|e| ResolveError::ResultDecodeError {
        message: format!("{}: {e}", C::SIGNATURE),
    })
}

/// Submits gateway payloads to the descriptor's callback for verification.
pub struct ProofVerifier {
    chain: Arc<dyn ChainReader>,
}

impl ProofVerifier {
    /// Create a verifier over the given chain handle.
    pub fn new(chain: Arc<dyn ChainReader>) -> Self {
        Self { chain }
    }

    /// Verify `response` for `pending`.
    ///
    /// A revert is [`ResolveError::ProofRejected`]; bytes that do not fit the
    /// original return type are [`ResolveError::ResultDecodeError`].
    pub async fn verify<C: SolCall + Sync>(
        &self,
        pending: &PendingLookup<C>,
        response: &GatewayResponse,
    ) -> ResolveResult<VerifyOutcome<C::Return>> {
        let descriptor = pending.descriptor();
        let sender = descriptor.sender;
        debug!(
            "Verifying gateway payload for {} with callback {} on {sender}",
            C::SIGNATURE,
            descriptor.callback
        );

        let result = self
            .chain
            .call(sender, callback_data(descriptor, response))
            .await;

        match classify(result) {
            CallOutcome::Direct(raw) => decode_wrapped::<C>(&raw).map(VerifyOutcome::Verified),
            CallOutcome::RedirectRequested(next) => {
                debug!("Verification on {sender} redirected again");
                Ok(VerifyOutcome::RedirectRequested(next))
            }
            CallOutcome::Failure(ResolveError::UnexpectedRevert { data }) => {
                warn!("Resolver {sender} rejected the gateway payload");
                Err(ResolveError::ProofRejected { sender, data })
            }
            CallOutcome::Failure(err) => Err(err),
        }
    }
}
