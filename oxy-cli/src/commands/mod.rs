//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod search;
mod sources;
mod url;

pub use search::SearchArgs;
pub use url::UrlArgs;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use oxy_client::ScrapeClient;
use oxy_core::request::ScrapeRequest;
use tracing::{debug, info};

use crate::config::ConnectionArgs;
use crate::display;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scrape search results for a query
    Search(SearchArgs),
    /// Scrape a single URL
    Url(UrlArgs),
    /// List the available sources
    Sources,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, connection: &ConnectionArgs) -> Result<()> {
    match command {
        Commands::Search(args) => search::handle_search(args, connection).await,
        Commands::Url(args) => url::handle_url(args, connection).await,
        Commands::Sources => {
            sources::list_sources();
            Ok(())
        }
    }
}

/// Submit a built request, wait for the outcome and print it
async fn run_job(connection: &ConnectionArgs, request: &ScrapeRequest, json: bool) -> Result<()> {
    let client = ScrapeClient::new(connection.to_client_config())
        .context("Invalid connection settings")?;
    debug!("Using {:?}", client.config());

    let pending = client
        .submit(request)
        .await
        .context("Failed to submit job")?;

    eprintln!(
        "{} job {} ({})",
        "Submitted".green(),
        pending.job_id().cyan(),
        request.source()
    );

    let response = pending.await.context("Job did not complete")?;
    info!(
        "Job finished with {} and {} result page(s)",
        response.status,
        response.results.len()
    );

    if json {
        display::print_json(&response)?;
    } else {
        display::print_response(&response);
    }

    Ok(())
}
