//! Function selectors and the capability identifiers built from them.

use alloy_primitives::{Selector, fixed_bytes, keccak256};

use crate::error::{ResolveError, ResolveResult};

/// `addr(bytes32)`: forward address records.
pub const ADDR_INTERFACE: Selector = fixed_bytes!("3b3b57de");

/// `name(bytes32)`: reverse name records.
pub const NAME_INTERFACE: Selector = fixed_bytes!("691f3431");

/// `resolve(bytes,bytes)`: extended resolvers that may redirect off-chain (ENSIP-10).
pub const EXTENDED_RESOLVER_INTERFACE: Selector = fixed_bytes!("9061b923");

/// First four bytes of `keccak256(signature)`.
///
/// The signature must already be canonical (`name(type,...)` with no spaces
/// or parameter names).
pub fn selector(signature: &str) -> ResolveResult<Selector> {
    if !is_canonical_signature(signature) {
        return Err(ResolveError::InvalidSignature {
            signature: signature.to_string(),
        });
    }
    Ok(Selector::from_slice(&keccak256(signature.as_bytes())[..4]))
}

fn is_canonical_signature(signature: &str) -> bool {
    let Some((name, rest)) = signature.split_once('(') else {
        return false;
    };
    !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && rest.ends_with(')')
        && !signature.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi;
    use alloy_sol_types::SolCall;

    #[test]
    fn test_known_selectors() {
        assert_eq!(selector("addr(bytes32)").unwrap(), ADDR_INTERFACE);
        assert_eq!(selector("name(bytes32)").unwrap(), NAME_INTERFACE);
        assert_eq!(
            selector("resolve(bytes,bytes)").unwrap(),
            EXTENDED_RESOLVER_INTERFACE
        );
    }

    #[test]
    fn test_selectors_match_abi_definitions() {
        assert_eq!(Selector::from(abi::addrCall::SELECTOR), ADDR_INTERFACE);
        assert_eq!(Selector::from(abi::nameCall::SELECTOR), NAME_INTERFACE);
        assert_eq!(
            Selector::from(abi::resolveCall::SELECTOR),
            EXTENDED_RESOLVER_INTERFACE
        );
    }

    #[test]
    fn test_selector_is_deterministic_and_distinct() {
        let corpus = [
            "addr(bytes32)",
            "name(bytes32)",
            "resolver(bytes32)",
            "recordExists(bytes32)",
            "supportsInterface(bytes4)",
            "resolve(bytes,bytes)",
            "resolveWithProof(bytes,bytes)",
            "text(bytes32,string)",
        ];
        let selectors: Vec<Selector> = corpus.iter().map(|s| selector(s).unwrap()).collect();

        for (i, sig) in corpus.iter().enumerate() {
            assert_eq!(selector(sig).unwrap(), selectors[i]);
            for other in &selectors[i + 1..] {
                assert_ne!(&selectors[i], other, "collision for {sig}");
            }
        }
    }

    #[test]
    fn test_rejects_malformed_signatures() {
        for bad in ["", "addr", "addr(bytes32", "(bytes32)", "addr(bytes32 node)", "ad dr()"] {
            assert!(
                matches!(selector(bad), Err(ResolveError::InvalidSignature { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
