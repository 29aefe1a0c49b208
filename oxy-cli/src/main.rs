//! Oxy CLI
//!
//! Command-line interface for submitting scraping jobs and printing their results.

mod commands;
mod config;
mod display;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::ConnectionArgs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxy")]
#[command(about = "Scraper API job client", long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    handle_command(cli.command, &cli.connection).await
}

/// Sets up the tracing subscriber; `RUST_LOG` wins over `-v`
fn setup_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("oxy=warn,oxy_client=warn"),
        1 => EnvFilter::new("oxy=info,oxy_client=info"),
        _ => EnvFilter::new("oxy=debug,oxy_client=debug"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
