//! CLI bootstrap - the composition root.
//!
//! The only place where adapters are instantiated: the JSON-RPC chain reader
//! and the HTTP gateway client are wired into a `NameResolver` here.

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::Address;
use ensgate_core::{
    ChainReader, GatewayPort, MAINNET_REGISTRY, NameResolver, ProbePolicy, ResolverSettings,
};
use ensgate_gateway::{DefaultGatewayClient, GatewayClientConfig};
use ensgate_rpc::{DefaultRpcClient, RpcClientConfig};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// JSON-RPC endpoint
    pub rpc_url: String,
    /// Block tag for eth_call
    pub block_tag: String,
    /// Resolution settings
    pub settings: ResolverSettings,
}

impl CliConfig {
    /// Derive the configuration from parsed flags.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let registry = match &cli.registry {
            Some(raw) => raw
                .trim()
                .parse::<Address>()
                .map_err(|e| CliError::Config(format!("invalid registry address '{raw}': {e}")))?,
            None => MAINNET_REGISTRY,
        };

        let probe_policy = if cli.skip_probe {
            ProbePolicy::Skip
        } else {
            ProbePolicy::Probe
        };

        let settings = ResolverSettings::new()
            .with_registry(registry)
            .with_probe_policy(probe_policy)
            .with_verify_reverse(!cli.no_verify_reverse)
            .with_gateway_timeout(Duration::from_secs(cli.gateway_timeout))
            .with_max_redirects(cli.max_redirects);

        Ok(Self {
            rpc_url: cli.rpc_url.clone(),
            block_tag: cli.block_tag.clone(),
            settings,
        })
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    resolver: NameResolver,
}

impl CliContext {
    /// Wrap an already composed resolver.
    pub const fn new(resolver: NameResolver) -> Self {
        Self { resolver }
    }

    pub const fn resolver(&self) -> &NameResolver {
        &self.resolver
    }
}

/// Build the production adapters and the resolver.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    debug!("Connecting to {} at block {}", config.rpc_url, config.block_tag);

    let rpc_config = RpcClientConfig::new()
        .with_endpoint(config.rpc_url)
        .with_block_tag(config.block_tag);
    let chain: Arc<dyn ChainReader> = Arc::new(
        DefaultRpcClient::new(&rpc_config).map_err(|e| CliError::Config(e.to_string()))?,
    );

    // The resolver bounds each attempt too; the client timeout is a backstop.
    let gateway_timeout = backstop_timeout(config.settings.gateway_timeout());
    let gateway_config = GatewayClientConfig::new().with_timeout(gateway_timeout);
    let gateway: Arc<dyn GatewayPort> = Arc::new(
        DefaultGatewayClient::new(&gateway_config).map_err(|e| CliError::Config(e.to_string()))?,
    );

    Ok(CliContext::new(NameResolver::new(
        chain,
        gateway,
        config.settings,
    )))
}

fn backstop_timeout(attempt: Duration) -> Duration {
    attempt.checked_mul(2).unwrap_or(Duration::MAX)
}
