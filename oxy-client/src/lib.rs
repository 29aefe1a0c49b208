//! Oxy HTTP Client
//!
//! An async client for the Oxylabs scraper API's push-pull job flow:
//! submit a job, poll its status until it is done, then fetch the results.
//!
//! Submission happens on the caller's task, so validation and submission
//! failures come back immediately. Polling runs on a background task and its
//! single outcome is delivered through a [`PendingScrape`].
//!
//! # Example
//!
//! ```no_run
//! use oxy_client::{ClientConfig, ScrapeClient};
//! use oxy_core::request::SearchOptions;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ScrapeClient::new(ClientConfig::new("user", "pass"))?;
//!
//!     let pending = client.google_search("adidas", &SearchOptions::default()).await?;
//!     println!("Submitted job {}", pending.job_id());
//!
//!     let response = pending.await?;
//!     println!("Got {} result page(s)", response.results.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
mod jobs;
mod pending;
pub mod poller;
mod sources;

// Re-export commonly used types
pub use config::{ClientConfig, Credentials};
pub use error::{ClientError, Result};
pub use jobs::JobBackend;
pub use pending::PendingScrape;
pub use poller::Poller;

use oxy_core::domain::response::ScrapeResponse;
use oxy_core::request::ScrapeRequest;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use tracing::info;

/// HTTP client for the scraper API
///
/// Cheap to clone; clones share the underlying connection pool and only
/// carry read-only configuration.
#[derive(Debug, Clone)]
pub struct ScrapeClient {
    config: ClientConfig,
    /// HTTP client instance
    client: Client,
}

impl ScrapeClient {
    /// Create a new client after validating `config`
    ///
    /// # Example
    /// ```
    /// use oxy_client::{ClientConfig, ScrapeClient};
    ///
    /// let client = ScrapeClient::new(ClientConfig::new("user", "pass")).unwrap();
    /// assert_eq!(client.config().results_url, "https://data.oxylabs.io");
    /// ```
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Self::with_client(config, client)
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure per-request timeouts, proxies, TLS settings, etc.
    pub fn with_client(mut config: ClientConfig, client: Client) -> Result<Self> {
        config.validate()?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config.results_url = config.results_url.trim_end_matches('/').to_string();
        Ok(Self { config, client })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit a job and hand back the pending outcome
    ///
    /// Returns an error without starting any background work when the
    /// submission itself fails.
    pub async fn submit(&self, request: &ScrapeRequest) -> Result<PendingScrape> {
        let job = self.submit_job(request).await?;

        info!(
            "Submitted {} job {} (status: {})",
            request.source(),
            job.id,
            job.status
        );

        let poller = Poller::new(
            self.clone(),
            self.config.poll_interval,
            self.config.timeout,
        );
        Ok(PendingScrape::spawn(poller, job))
    }

    /// Submit a job and wait for its outcome
    pub async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResponse> {
        self.submit(request).await?.await
    }

    // =============================================================================
    // Request Helpers
    // =============================================================================

    /// Attach credentials and the JSON content type
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let credentials = &self.config.credentials;
        builder
            .basic_auth(&credentials.username, Some(&credentials.password))
            .header(CONTENT_TYPE, "application/json")
    }

    fn status_url(&self, job_id: &str) -> String {
        format!("{}/v1/queries/{}", self.config.results_url, job_id)
    }

    fn results_url(&self, job_id: &str) -> String {
        format!("{}/v1/queries/{}/results", self.config.results_url, job_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ScrapeClient::new(ClientConfig::new("user", "pass")).unwrap();
        assert_eq!(client.status_url("42"), "https://data.oxylabs.io/v1/queries/42");
        assert_eq!(
            client.results_url("42"),
            "https://data.oxylabs.io/v1/queries/42/results"
        );
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let config = ClientConfig::new("user", "pass").with_results_url("http://localhost:8080/");
        let client = ScrapeClient::new(config).unwrap();
        assert_eq!(client.config().results_url, "http://localhost:8080");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let err = ScrapeClient::new(ClientConfig::new("", "pass")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }
}
