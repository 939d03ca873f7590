//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the resolution services expect from
//! infrastructure. They contain no transport details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP or JSON-RPC types in any signature
//! - Handles are passed explicitly (`Arc<dyn ...>`), never looked up globally
//! - Call failures keep revert payloads intact for the decoder

pub mod chain;
pub mod gateway;

pub use chain::{CallError, ChainReader};
pub use gateway::{GatewayPort, GatewayPortError, GatewayRequest};

#[cfg(test)]
pub use chain::MockChainReader;
#[cfg(test)]
pub use gateway::MockGatewayPort;
