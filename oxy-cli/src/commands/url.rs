//! URL command
//!
//! Builds a URL-based request from flags.

use anyhow::{Context, Result};
use clap::Args;
use oxy_core::Source;
use oxy_core::request::{Render, ScrapeRequest, UrlOptions, UserAgent};

use crate::config::ConnectionArgs;

/// Arguments for the url command
#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Absolute URL on the source's host
    pub url: String,

    /// URL-based source (google, bing, google_shopping)
    #[arg(short, long, default_value = "google")]
    pub source: Source,

    #[arg(long)]
    pub user_agent: Option<UserAgent>,

    #[arg(long)]
    pub parse: bool,

    #[arg(long)]
    pub render: Option<Render>,

    #[arg(long)]
    pub geo_location: Option<String>,

    /// URL the provider notifies when the job finishes
    #[arg(long)]
    pub callback_url: Option<String>,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

/// Handle the url command
pub async fn handle_url(args: UrlArgs, connection: &ConnectionArgs) -> Result<()> {
    let options = UrlOptions {
        user_agent: args.user_agent,
        parse: args.parse,
        render: args.render,
        geo_location: args.geo_location,
        callback_url: args.callback_url,
    };

    let request =
        ScrapeRequest::url(args.source, &args.url, &options).context("Invalid URL request")?;

    super::run_job(connection, &request, args.json).await
}
