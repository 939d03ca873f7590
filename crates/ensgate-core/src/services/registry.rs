//! Registry walk: identifier -> resolver address.

use std::sync::Arc;

use alloy_primitives::Address;
use tracing::debug;

use super::read_contract;
use crate::abi::{recordExistsCall, resolverCall};
use crate::domain::{Absence, Lookup, Name, Node};
use crate::error::ResolveResult;
use crate::ports::ChainReader;

/// What to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Name to address.
    Forward(Name),
    /// Address to name, through the reverse namespace.
    Reverse(Address),
}

impl Target {
    /// The name whose node is queried.
    pub fn name(&self) -> Name {
        match self {
            Self::Forward(name) => name.clone(),
            Self::Reverse(address) => Name::reverse(*address),
        }
    }
}

/// A resolver found for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverHit {
    /// Node of the queried name
    pub node: Node,
    /// Resolver contract
    pub resolver: Address,
    /// False when the resolver was inherited from a parent name
    pub exact: bool,
}

/// Reads resolver mappings and record existence from the registry.
pub struct RegistryLookup {
    chain: Arc<dyn ChainReader>,
    registry: Address,
}

impl RegistryLookup {
    /// Create a lookup against the registry at `registry`.
    pub fn new(chain: Arc<dyn ChainReader>, registry: Address) -> Self {
        Self { chain, registry }
    }

    /// Resolver configured for `node`, `None` when unset.
    pub async fn resolver(&self, node: Node) -> ResolveResult<Option<Address>> {
        let call = resolverCall { node: node.into() };
        let resolver = read_contract(self.chain.as_ref(), self.registry, &call).await?;
        Ok((!resolver.is_zero()).then_some(resolver))
    }

    /// Whether the registry holds any record for `node`.
    pub async fn record_exists(&self, node: Node) -> ResolveResult<bool> {
        let call = recordExistsCall { node: node.into() };
        read_contract(self.chain.as_ref(), self.registry, &call).await
    }

    /// Find the resolver for exactly the target's node.
    ///
    /// Reverse targets check record existence first; a missing reverse record
    /// is [`Absence::NoReverseRecord`].
    pub async fn find(&self, target: &Target) -> ResolveResult<Lookup<ResolverHit>> {
        let node = target.name().node();

        if matches!(target, Target::Reverse(_)) && !self.record_exists(node).await? {
            debug!("No reverse record for {node}");
            return Ok(Lookup::Absent(Absence::NoReverseRecord));
        }

        match self.resolver(node).await? {
            Some(resolver) => {
                debug!("Registry resolver for {node}: {resolver}");
                Ok(Lookup::Found(ResolverHit {
                    node,
                    resolver,
                    exact: true,
                }))
            }
            None => {
                debug!("No resolver set for {node}");
                Ok(Lookup::Absent(Absence::ResolverUnset))
            }
        }
    }

    /// Find a resolver for `name` or its nearest ancestor (ENSIP-10).
    ///
    /// The root never counts as a match.
    pub async fn find_wildcard(&self, name: &Name) -> ResolveResult<Lookup<ResolverHit>> {
        let node = name.node();
        let mut current = Some(name.clone());

        while let Some(candidate) = current.filter(|c| !c.is_root()) {
            if let Some(resolver) = self.resolver(candidate.node()).await? {
                let exact = &candidate == name;
                debug!("Resolver for {name} found at {candidate}: {resolver}");
                return Ok(Lookup::Found(ResolverHit {
                    node,
                    resolver,
                    exact,
                }));
            }
            current = candidate.parent();
        }

        debug!("No resolver set for {name} or any parent");
        Ok(Lookup::Absent(Absence::ResolverUnset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::ports::CallError;
    use crate::services::testing::{FakeChain, encode_return};
    use alloy_primitives::address;

    const REGISTRY: Address = address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e");
    const RESOLVER: Address = address!("4976fb03c32e5b8cfe2b6ccb31c09ba78ebaba41");

    fn resolver_of(name: &str) -> resolverCall {
        resolverCall {
            node: Name::parse(name).unwrap().node().into(),
        }
    }

    fn lookup(chain: FakeChain) -> RegistryLookup {
        RegistryLookup::new(Arc::new(chain), REGISTRY)
    }

    #[tokio::test]
    async fn test_forward_hit() {
        let chain = FakeChain::new().on(
            REGISTRY,
            &resolver_of("nick.eth"),
            Ok(encode_return(RESOLVER)),
        );
        let name = Name::parse("nick.eth").unwrap();

        let hit = lookup(chain)
            .find(&Target::Forward(name.clone()))
            .await
            .unwrap()
            .found()
            .unwrap();
        assert_eq!(hit.resolver, RESOLVER);
        assert_eq!(hit.node, name.node());
        assert!(hit.exact);
    }

    #[tokio::test]
    async fn test_zero_resolver_is_unset() {
        let chain = FakeChain::new().on(
            REGISTRY,
            &resolver_of("nobody.eth"),
            Ok(encode_return(Address::ZERO)),
        );
        let target = Target::Forward(Name::parse("nobody.eth").unwrap());

        assert_eq!(
            lookup(chain).find(&target).await.unwrap(),
            Lookup::Absent(Absence::ResolverUnset)
        );
    }

    #[tokio::test]
    async fn test_reverse_without_record() {
        let address = address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        let node = Name::reverse(address).node();
        let chain = FakeChain::new().on(
            REGISTRY,
            &recordExistsCall { node: node.into() },
            Ok(encode_return(false)),
        );
        let chain = Arc::new(chain);
        let registry = RegistryLookup::new(chain.clone(), REGISTRY);

        assert_eq!(
            registry.find(&Target::Reverse(address)).await.unwrap(),
            Lookup::Absent(Absence::NoReverseRecord)
        );
        // The resolver is never read once the record is known to be missing.
        assert_eq!(chain.call_count(), 1);
    }

    #[tokio::test]
    async fn test_reverse_with_record() {
        let address = address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        let node = Name::reverse(address).node();
        let chain = FakeChain::new()
            .on(
                REGISTRY,
                &recordExistsCall { node: node.into() },
                Ok(encode_return(true)),
            )
            .on(
                REGISTRY,
                &resolverCall { node: node.into() },
                Ok(encode_return(RESOLVER)),
            );

        let hit = lookup(chain)
            .find(&Target::Reverse(address))
            .await
            .unwrap()
            .found()
            .unwrap();
        assert_eq!(hit.node, node);
        assert_eq!(hit.resolver, RESOLVER);
    }

    #[tokio::test]
    async fn test_wildcard_falls_back_to_parent() {
        let chain = FakeChain::new()
            .on(
                REGISTRY,
                &resolver_of("sub.offchain.eth"),
                Ok(encode_return(Address::ZERO)),
            )
            .on(
                REGISTRY,
                &resolver_of("offchain.eth"),
                Ok(encode_return(RESOLVER)),
            );
        let name = Name::parse("sub.offchain.eth").unwrap();

        let hit = lookup(chain)
            .find_wildcard(&name)
            .await
            .unwrap()
            .found()
            .unwrap();
        assert_eq!(hit.resolver, RESOLVER);
        assert_eq!(hit.node, name.node());
        assert!(!hit.exact);
    }

    #[tokio::test]
    async fn test_wildcard_never_uses_root() {
        let chain = FakeChain::new()
            .on(REGISTRY, &resolver_of("a.b"), Ok(encode_return(Address::ZERO)))
            .on(REGISTRY, &resolver_of("b"), Ok(encode_return(Address::ZERO)))
            .on(REGISTRY, &resolver_of(""), Ok(encode_return(RESOLVER)));
        let name = Name::parse("a.b").unwrap();

        assert_eq!(
            lookup(chain).find_wildcard(&name).await.unwrap(),
            Lookup::Absent(Absence::ResolverUnset)
        );
    }

    #[tokio::test]
    async fn test_registry_transport_failure_propagates() {
        let chain = FakeChain::new().on(
            REGISTRY,
            &resolver_of("nick.eth"),
            Err(CallError::Transport {
                message: "503 from node".to_string(),
            }),
        );
        let target = Target::Forward(Name::parse("nick.eth").unwrap());

        assert!(matches!(
            lookup(chain).find(&target).await,
            Err(ResolveError::Transport { .. })
        ));
    }
}
