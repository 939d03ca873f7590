#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod abi;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ADDR_INTERFACE, Absence, CallOutcome, EXTENDED_RESOLVER_INTERFACE, GatewayResponse, Lookup,
    NAME_INTERFACE, Name, Node, RedirectDescriptor, WireName, classify, decode_revert, selector,
};
pub use error::{ResolveError, ResolveResult};
pub use ports::{CallError, ChainReader, GatewayPort, GatewayPortError, GatewayRequest};
pub use services::{NameResolver, PendingLookup, ProofVerifier, VerifyOutcome};
pub use settings::{
    DEFAULT_GATEWAY_TIMEOUT, DEFAULT_MAX_REDIRECTS, MAINNET_REGISTRY, ProbePolicy,
    ResolverSettings,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
