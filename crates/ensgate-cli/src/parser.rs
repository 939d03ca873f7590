//! Main CLI parser and global options.

use clap::Parser;

use crate::commands::Commands;

/// Resolve names to addresses and back, following off-chain gateway redirects.
#[derive(Parser, Debug)]
#[command(name = "ensgate")]
#[command(about = "Resolve names and addresses, following off-chain gateway redirects")]
#[command(version)]
pub struct Cli {
    /// JSON-RPC endpoint used for every contract read
    #[arg(
        long = "rpc-url",
        env = "ENSGATE_RPC_URL",
        global = true,
        default_value = "http://127.0.0.1:8545"
    )]
    pub rpc_url: String,

    /// Registry contract address (defaults to the mainnet registry)
    #[arg(long, env = "ENSGATE_REGISTRY", global = true)]
    pub registry: Option<String>,

    /// Block tag for eth_call
    #[arg(
        long = "block-tag",
        env = "ENSGATE_BLOCK_TAG",
        global = true,
        default_value = "latest"
    )]
    pub block_tag: String,

    /// Per-gateway timeout in seconds (1 to 3600)
    #[arg(
        long = "gateway-timeout",
        env = "ENSGATE_GATEWAY_TIMEOUT",
        global = true,
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..=3600)
    )]
    pub gateway_timeout: u64,

    /// Maximum nested redirects followed during verification
    #[arg(
        long = "max-redirects",
        env = "ENSGATE_MAX_REDIRECTS",
        global = true,
        default_value_t = 4
    )]
    pub max_redirects: u8,

    /// Read records without asking the resolver for supportsInterface first
    #[arg(long = "skip-probe", env = "ENSGATE_SKIP_PROBE", global = true)]
    pub skip_probe: bool,

    /// Report reverse names without checking they resolve back
    #[arg(
        long = "no-verify-reverse",
        env = "ENSGATE_NO_VERIFY_REVERSE",
        global = true
    )]
    pub no_verify_reverse: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
