//! Redirect descriptors and the classification of raw call results.
//!
//! A resolver that wants the caller to go off-chain reverts with the
//! EIP-3668 `OffchainLookup` error. [`classify`] turns a call result into a
//! tagged outcome so that "is this a redirect" is a pattern match.

use alloy_primitives::{Address, Bytes, Selector};
use alloy_sol_types::SolError;

use crate::abi::OffchainLookup;
use crate::error::{ResolveError, ResolveResult};
use crate::ports::CallError;

/// Instruction to fetch an answer off-chain and return it for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectDescriptor {
    /// Contract that issued the redirect and will verify the answer
    pub sender: Address,
    /// Gateway URL templates, tried in order
    pub urls: Vec<String>,
    /// Data the gateway should answer
    pub call_data: Bytes,
    /// Selector of the verification entry point on `sender`
    pub callback: Selector,
    /// Opaque context passed back to the callback
    pub extra_data: Bytes,
}

impl From<OffchainLookup> for RedirectDescriptor {
    fn from(lookup: OffchainLookup) -> Self {
        Self {
            sender: lookup.sender,
            urls: lookup.urls,
            call_data: lookup.callData,
            callback: lookup.callbackFunction,
            extra_data: lookup.extraData,
        }
    }
}

/// Payload returned by a gateway, opaque until verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    /// Decoded `data` field of the gateway body
    pub data: Bytes,
}

/// A contract call result after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// The call returned normally.
    Direct(Bytes),
    /// The call reverted with a well-formed redirect descriptor.
    RedirectRequested(RedirectDescriptor),
    /// Anything else.
    Failure(ResolveError),
}

/// Classify a raw call result. Total: never panics, never loses the payload.
pub fn classify(result: Result<Bytes, CallError>) -> CallOutcome {
    match result {
        Ok(data) => CallOutcome::Direct(data),
        Err(CallError::Reverted { data: Some(data) }) => match decode_revert(&data) {
            Ok(descriptor) => CallOutcome::RedirectRequested(descriptor),
            Err(err) => CallOutcome::Failure(err),
        },
        Err(err) => CallOutcome::Failure(err.into()),
    }
}

/// Decode a revert payload as a redirect descriptor.
///
/// A payload without the `OffchainLookup` selector is returned unchanged as
/// [`ResolveError::UnexpectedRevert`]. A payload with the selector but an
/// undecodable body is [`ResolveError::RedirectDescriptorMalformed`].
pub fn decode_revert(data: &Bytes) -> ResolveResult<RedirectDescriptor> {
    if data.len() < 4 || data[..4] != OffchainLookup::SELECTOR {
        return Err(ResolveError::UnexpectedRevert {
            data: Some(data.clone()),
        });
    }

    let lookup = OffchainLookup::abi_decode(data).map_err(|e| {
        ResolveError::RedirectDescriptorMalformed {
            reason: e.to_string(),
        }
    })?;

    if lookup.urls.is_empty() {
        return Err(ResolveError::RedirectDescriptorMalformed {
            reason: "descriptor lists no gateway URLs".to_string(),
        });
    }

    Ok(lookup.into())
}
