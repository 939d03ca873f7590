#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// GatewayClient's backend parameter is an implementation detail; callers use
// DefaultGatewayClient through the GatewayPort trait.
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultGatewayClient;

// Configuration
pub use config::GatewayClientConfig;

// Construction errors
pub use error::GatewayError;
