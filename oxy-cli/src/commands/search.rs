//! Search command
//!
//! Builds a query-based request from flags.

use anyhow::{Context, Result};
use clap::Args;
use oxy_core::Source;
use oxy_core::request::{
    ContextOption, PageLimit, Render, ScrapeRequest, SearchOptions, SortBy, UserAgent,
};

use crate::config::ConnectionArgs;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Query-based source (google_search, bing_search, google_shopping_search)
    #[arg(short, long, default_value = "google_search")]
    pub source: Source,

    /// Top-level domain, e.g. com, de, co.uk
    #[arg(long)]
    pub domain: Option<String>,

    #[arg(long)]
    pub start_page: Option<u32>,

    #[arg(long)]
    pub pages: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub limit: Option<u32>,

    /// Per-page result counts as PAGE:LIMIT, repeatable; excludes --start-page/--pages/--limit
    #[arg(long = "limit-per-page", value_parser = parse_page_limit)]
    pub limit_per_page: Vec<PageLimit>,

    #[arg(long)]
    pub geo_location: Option<String>,

    /// desktop, mobile_ios, tablet_android, ...
    #[arg(long)]
    pub user_agent: Option<UserAgent>,

    /// Ask the provider for parsed JSON instead of raw HTML
    #[arg(long)]
    pub parse: bool,

    /// html or png
    #[arg(long)]
    pub render: Option<Render>,

    #[arg(long)]
    pub results_language: Option<String>,

    /// Similar-results filter (0 or 1)
    #[arg(long)]
    pub filter: Option<u8>,

    #[arg(long)]
    pub nfpr: bool,

    #[arg(long)]
    pub safe_search: bool,

    #[arg(long)]
    pub fpstate: Option<String>,

    #[arg(long)]
    pub tbm: Option<String>,

    #[arg(long)]
    pub tbs: Option<String>,

    /// Shopping sort order: r, rv, p, pd
    #[arg(long)]
    pub sort_by: Option<SortBy>,

    #[arg(long)]
    pub min_price: Option<u32>,

    #[arg(long)]
    pub max_price: Option<u32>,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    /// Collect the flags into request options
    pub fn to_options(&self) -> SearchOptions {
        let mut context = Vec::new();

        if let Some(lang) = &self.results_language {
            context.push(ContextOption::ResultsLanguage(lang.clone()));
        }
        if let Some(filter) = self.filter {
            context.push(ContextOption::Filter(filter));
        }
        if !self.limit_per_page.is_empty() {
            context.push(ContextOption::LimitPerPage(self.limit_per_page.clone()));
        }
        if self.nfpr {
            context.push(ContextOption::Nfpr(true));
        }
        if self.safe_search {
            context.push(ContextOption::SafeSearch(true));
        }
        if let Some(fpstate) = &self.fpstate {
            context.push(ContextOption::Fpstate(fpstate.clone()));
        }
        if let Some(tbm) = &self.tbm {
            context.push(ContextOption::Tbm(tbm.clone()));
        }
        if let Some(tbs) = &self.tbs {
            context.push(ContextOption::Tbs(tbs.clone()));
        }
        if let Some(sort_by) = self.sort_by {
            context.push(ContextOption::SortBy(sort_by));
        }
        if let Some(min) = self.min_price {
            context.push(ContextOption::MinPrice(min));
        }
        if let Some(max) = self.max_price {
            context.push(ContextOption::MaxPrice(max));
        }

        SearchOptions {
            domain: self.domain.clone(),
            start_page: self.start_page,
            pages: self.pages,
            limit: self.limit,
            geo_location: self.geo_location.clone(),
            user_agent: self.user_agent,
            parse: self.parse,
            render: self.render,
            context,
        }
    }
}

/// Handle the search command
pub async fn handle_search(args: SearchArgs, connection: &ConnectionArgs) -> Result<()> {
    let request = ScrapeRequest::search(args.source, &args.query, &args.to_options())
        .context("Invalid search request")?;

    super::run_job(connection, &request, args.json).await
}

/// Parse a PAGE:LIMIT pair
fn parse_page_limit(s: &str) -> Result<PageLimit, String> {
    let (page, limit) = s
        .split_once(':')
        .ok_or_else(|| format!("expected PAGE:LIMIT, got {}", s))?;

    Ok(PageLimit {
        page: page
            .trim()
            .parse()
            .map_err(|_| format!("invalid page number: {}", page))?,
        limit: limit
            .trim()
            .parse()
            .map_err(|_| format!("invalid limit: {}", limit))?,
    })
}
