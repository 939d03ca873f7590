#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// RpcClient's backend parameter is an implementation detail; callers use
// DefaultRpcClient through the ChainReader trait.
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultRpcClient;

// Configuration
pub use config::RpcClientConfig;

// Construction errors
pub use error::RpcError;
