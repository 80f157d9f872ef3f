//! uiconfig admin CLI
//!
//! Usage:
//!   uiconfig --adapter-url http://localhost:9022/v1 theme get
//!   uiconfig packages add --name fw --type deviceConfiguration \
//!       --config-type firmware @firmware.json
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use uiconfig_cli::{Cli, execute, open_storage, resolve_config};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    let storage = open_storage(&cli, &config)?;
    if cli.in_memory {
        info!("Using in-memory store; nothing will be persisted");
    }

    let output = execute(&cli.command, &storage).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
