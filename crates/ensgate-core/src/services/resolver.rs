//! Resolution orchestration: the user-facing lookups.

use std::sync::Arc;

use alloy_primitives::{Address, Bytes, Selector};
use alloy_sol_types::SolCall;
use tracing::{debug, info, warn};

use super::{
    GatewayFetcher, InterfaceProbe, PendingLookup, ProofVerifier, RegistryLookup, ResolverHit,
    Target, VerifyOutcome, decode_wrapped, read_contract,
};
use crate::abi::{addrCall, nameCall, resolveCall};
use crate::domain::{
    ADDR_INTERFACE, Absence, CallOutcome, EXTENDED_RESOLVER_INTERFACE, Lookup, Name, classify,
};
use crate::error::{ResolveError, ResolveResult};
use crate::ports::{ChainReader, GatewayPort};
use crate::settings::{ProbePolicy, ResolverSettings};

/// Resolves names to addresses and back.
///
/// Holds no mutable state; one instance can serve concurrent requests.
pub struct NameResolver {
    chain: Arc<dyn ChainReader>,
    registry: RegistryLookup,
    probe: InterfaceProbe,
    fetcher: GatewayFetcher,
    verifier: ProofVerifier,
    settings: ResolverSettings,
}

impl NameResolver {
    /// Create a resolver over a chain reader and a gateway port.
    pub fn new(
        chain: Arc<dyn ChainReader>,
        gateway: Arc<dyn GatewayPort>,
        settings: ResolverSettings,
    ) -> Self {
        Self {
            registry: RegistryLookup::new(chain.clone(), settings.registry()),
            probe: InterfaceProbe::new(chain.clone()),
            fetcher: GatewayFetcher::new(gateway, settings.gateway_timeout()),
            verifier: ProofVerifier::new(chain.clone()),
            chain,
            settings,
        }
    }

    pub const fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Plain forward lookup: registry, capability probe, `addr(node)`.
    pub async fn resolve_forward(&self, name: &str) -> ResolveResult<Lookup<Address>> {
        let name = Name::parse(name)?;
        info!("Resolving {name}");

        match self.registry.find(&Target::Forward(name)).await? {
            Lookup::Found(hit) => self.read_address(hit, self.settings.probe_policy()).await,
            Lookup::Absent(absence) => Ok(Lookup::Absent(absence)),
        }
    }

    /// Forward lookup through the extended resolver entry point.
    ///
    /// The resolver is found by wildcard walk. A redirect is followed through
    /// gateway fetch and proof verification; a resolver that answers directly
    /// is accepted as is.
    pub async fn resolve_gateway_redirect(&self, name: &str) -> ResolveResult<Lookup<Address>> {
        let name = Name::parse(name)?;
        info!("Resolving {name} through gateway redirect");

        match self.registry.find_wildcard(&name).await? {
            Lookup::Found(hit) => self.read_address_extended(&name, hit).await,
            Lookup::Absent(absence) => Ok(Lookup::Absent(absence)),
        }
    }

    /// Forward lookup that picks the path from the resolver's capabilities.
    ///
    /// Resolvers advertising the extended interface go through
    /// [`Self::resolve_gateway_redirect`]'s flow; others are read directly.
    /// A resolver that cannot answer the probe at all is treated as legacy and
    /// read without further probing. A resolver inherited from a parent name
    /// is only usable when extended.
    pub async fn resolve_address(&self, name: &str) -> ResolveResult<Lookup<Address>> {
        let name = Name::parse(name)?;
        info!("Resolving {name}");

        let hit = match self.registry.find_wildcard(&name).await? {
            Lookup::Found(hit) => hit,
            Lookup::Absent(absence) => return Ok(Lookup::Absent(absence)),
        };

        let policy = self.settings.probe_policy();
        if policy == ProbePolicy::Skip {
            return self.read_address_exact(hit, policy).await;
        }

        match self
            .probe
            .supports(hit.resolver, EXTENDED_RESOLVER_INTERFACE)
            .await
        {
            Ok(true) => self.read_address_extended(&name, hit).await,
            Ok(false) => self.read_address_exact(hit, policy).await,
            Err(ResolveError::CapabilityProbeFailed { message, .. }) => {
                debug!(
                    "Resolver {} cannot be probed ({message}), reading it as legacy",
                    hit.resolver
                );
                self.read_address_exact(hit, ProbePolicy::Skip).await
            }
            Err(err) => Err(err),
        }
    }

    /// Reverse lookup: the primary name of `address`.
    ///
    /// The reverse resolver is asked for `name(node)` directly; the default
    /// reverse resolvers predate capability probing. With reverse verification
    /// on, the name must resolve back to `address`.
    pub async fn resolve_reverse(&self, address: Address) -> ResolveResult<Lookup<String>> {
        info!("Reverse resolving {address}");

        let hit = match self.registry.find(&Target::Reverse(address)).await? {
            Lookup::Found(hit) => hit,
            Lookup::Absent(absence) => return Ok(Lookup::Absent(absence)),
        };

        let call = nameCall {
            node: hit.node.into(),
        };
        let name = read_contract(self.chain.as_ref(), hit.resolver, &call).await?;
        if name.is_empty() {
            return Ok(Lookup::Absent(Absence::EmptyRecord));
        }

        if !self.settings.verify_reverse() {
            return Ok(Lookup::Found(name));
        }

        let Ok(parsed) = Name::parse(&name) else {
            warn!("Reverse record of {address} is not a valid name: {name:?}");
            return Ok(Lookup::Absent(Absence::ReverseMismatch));
        };

        match self.resolve_address(parsed.as_str()).await? {
            Lookup::Found(forward) if forward == address => Ok(Lookup::Found(name)),
            other => {
                debug!("{name} resolves to {other:?}, not {address}");
                Ok(Lookup::Absent(Absence::ReverseMismatch))
            }
        }
    }

    async fn capable(
        &self,
        resolver: Address,
        selector: Selector,
        policy: ProbePolicy,
    ) -> ResolveResult<bool> {
        match policy {
            ProbePolicy::Probe => self.probe.supports(resolver, selector).await,
            ProbePolicy::Skip => Ok(true),
        }
    }

    async fn read_address_exact(
        &self,
        hit: ResolverHit,
        policy: ProbePolicy,
    ) -> ResolveResult<Lookup<Address>> {
        if hit.exact {
            self.read_address(hit, policy).await
        } else {
            debug!("Inherited resolver {} is not extended", hit.resolver);
            Ok(Lookup::Absent(Absence::ResolverUnset))
        }
    }

    async fn read_address(
        &self,
        hit: ResolverHit,
        policy: ProbePolicy,
    ) -> ResolveResult<Lookup<Address>> {
        if !self.capable(hit.resolver, ADDR_INTERFACE, policy).await? {
            return Ok(Lookup::Absent(Absence::CapabilityUnsupported));
        }

        let call = addrCall {
            node: hit.node.into(),
        };
        let address = read_contract(self.chain.as_ref(), hit.resolver, &call).await?;
        Ok(non_zero(address))
    }

    async fn read_address_extended(
        &self,
        name: &Name,
        hit: ResolverHit,
    ) -> ResolveResult<Lookup<Address>> {
        let call = addrCall {
            node: hit.node.into(),
        };
        let address = self.call_extended(name, hit.resolver, call).await?;
        Ok(non_zero(address))
    }

    /// Issue `call` through `resolve(name, data)` and follow any redirect.
    async fn call_extended<C: SolCall + Sync>(
        &self,
        name: &Name,
        resolver: Address,
        call: C,
    ) -> ResolveResult<C::Return> {
        let outer = resolveCall {
            name: name.wire().into_bytes(),
            data: Bytes::from(call.abi_encode()),
        };
        let result = self
            .chain
            .call(resolver, Bytes::from(outer.abi_encode()))
            .await;

        match classify(result) {
            CallOutcome::Direct(raw) => {
                debug!("Resolver {resolver} answered {name} without redirect");
                decode_wrapped::<C>(&raw)
            }
            CallOutcome::RedirectRequested(descriptor) => {
                debug!(
                    "Resolver {resolver} redirected {name} to {} gateway(s)",
                    descriptor.urls.len()
                );
                self.follow(PendingLookup::new(call, resolver, descriptor)?)
                    .await
            }
            CallOutcome::Failure(err) => Err(err),
        }
    }

    async fn follow<C: SolCall + Sync>(
        &self,
        mut pending: PendingLookup<C>,
    ) -> ResolveResult<C::Return> {
        let limit = self.settings.max_redirects();
        let mut nested = 0u8;

        loop {
            let response = self.fetcher.fetch(pending.descriptor()).await?;

            match self.verifier.verify(&pending, &response).await? {
                VerifyOutcome::Verified(value) => return Ok(value),
                VerifyOutcome::RedirectRequested(next) => {
                    if nested >= limit {
                        warn!("Giving up after {limit} nested redirects");
                        return Err(ResolveError::TooManyRedirects { limit });
                    }
                    nested += 1;
                    pending = pending.redirect(next)?;
                }
            }
        }
    }
}

fn non_zero(address: Address) -> Lookup<Address> {
    if address.is_zero() {
        Lookup::Absent(Absence::EmptyRecord)
    } else {
        Lookup::Found(address)
    }
}
