//! CLI entry point - the composition root.
//!
//! Parses flags, initialises logging, bootstraps the adapters and dispatches
//! to a handler. Handler errors become exit codes.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ensgate_cli::handlers::resolve::ForwardPath;
use ensgate_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config)?;

    match cli.command {
        Commands::Resolve { name } => {
            handlers::resolve::execute(&ctx, &name, ForwardPath::Plain).await
        }
        Commands::Offchain { name } => {
            handlers::resolve::execute(&ctx, &name, ForwardPath::Offchain).await
        }
        Commands::Lookup { name } => {
            handlers::resolve::execute(&ctx, &name, ForwardPath::Automatic).await
        }
        Commands::Reverse { address } => handlers::reverse::execute(&ctx, &address).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads ENSGATE_*
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
