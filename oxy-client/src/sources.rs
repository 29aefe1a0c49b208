//! Per-source shortcuts
//!
//! Each method validates and builds the request before anything is sent, then
//! submits it. Validation errors are returned without touching the network.

use oxy_core::request::{ScrapeRequest, SearchOptions, UrlOptions};

use crate::ScrapeClient;
use crate::error::Result;
use crate::pending::PendingScrape;

impl ScrapeClient {
    // =============================================================================
    // Search Engines
    // =============================================================================

    /// Scrape Google search results for `query`
    ///
    /// # Example
    /// ```no_run
    /// # use oxy_client::{ClientConfig, ScrapeClient};
    /// # use oxy_core::request::{ContextOption, SearchOptions};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = ScrapeClient::new(ClientConfig::new("user", "pass"))?;
    /// let options = SearchOptions {
    ///     parse: true,
    ///     ..Default::default()
    /// }
    /// .with_context(ContextOption::ResultsLanguage("en".into()));
    ///
    /// let response = client.google_search("adidas", &options).await?.await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn google_search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<PendingScrape> {
        let request = ScrapeRequest::google_search(query, options)?;
        self.submit(&request).await
    }

    /// Scrape a Google URL
    pub async fn google_url(&self, url: &str, options: &UrlOptions) -> Result<PendingScrape> {
        let request = ScrapeRequest::google_url(url, options)?;
        self.submit(&request).await
    }

    /// Scrape Bing search results for `query`
    pub async fn bing_search(&self, query: &str, options: &SearchOptions) -> Result<PendingScrape> {
        let request = ScrapeRequest::bing_search(query, options)?;
        self.submit(&request).await
    }

    /// Scrape a Bing URL
    pub async fn bing_url(&self, url: &str, options: &UrlOptions) -> Result<PendingScrape> {
        let request = ScrapeRequest::bing_url(url, options)?;
        self.submit(&request).await
    }

    // =============================================================================
    // E-commerce
    // =============================================================================

    /// Scrape Google Shopping results for `query`
    pub async fn google_shopping_search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<PendingScrape> {
        let request = ScrapeRequest::google_shopping_search(query, options)?;
        self.submit(&request).await
    }

    /// Scrape a Google Shopping URL
    pub async fn google_shopping_url(
        &self,
        url: &str,
        options: &UrlOptions,
    ) -> Result<PendingScrape> {
        let request = ScrapeRequest::google_shopping_url(url, options)?;
        self.submit(&request).await
    }
}
