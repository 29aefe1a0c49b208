//! Client configuration
//!
//! Connection settings, credentials and the polling budget.

use std::time::Duration;

use url::Url;

use crate::error::{ClientError, Result};

/// Job submission endpoint
pub const DEFAULT_BASE_URL: &str = "https://data.oxylabs.io/v1/queries";
/// Host serving job status and results
pub const DEFAULT_RESULTS_URL: &str = "https://data.oxylabs.io";
/// Total time a job may take from submission to a terminal status
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(50);
/// Pause between two status polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Upper bound on a single HTTP call (submit, poll or results fetch)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API credentials, sent as HTTP basic auth
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL jobs are POSTed to
    pub base_url: String,

    /// Host for `/v1/queries/{id}` and `/v1/queries/{id}/results`
    pub results_url: String,

    pub credentials: Credentials,

    /// Polling gives up once this much time has passed since submission
    pub timeout: Duration,

    /// Fixed sleep between polls
    pub poll_interval: Duration,

    /// A single HTTP call that takes longer fails as a transport error
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Creates a new configuration with defaults
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            results_url: DEFAULT_RESULTS_URL.to_string(),
            credentials: Credentials {
                username: username.into(),
                password: password.into(),
            },
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - OXYLABS_USERNAME (required)
    /// - OXYLABS_PASSWORD (required)
    /// - OXYLABS_BASE_URL (optional)
    /// - OXYLABS_RESULTS_URL (optional)
    /// - OXYLABS_TIMEOUT (optional, seconds, default: 50)
    /// - OXYLABS_POLL_INTERVAL_MS (optional, milliseconds, default: 2000)
    /// - OXYLABS_REQUEST_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let username = lookup("OXYLABS_USERNAME").ok_or_else(|| {
            ClientError::InvalidConfig("OXYLABS_USERNAME environment variable not set".into())
        })?;
        let password = lookup("OXYLABS_PASSWORD").ok_or_else(|| {
            ClientError::InvalidConfig("OXYLABS_PASSWORD environment variable not set".into())
        })?;

        let mut config = Self::new(username, password);

        if let Some(base_url) = lookup("OXYLABS_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(results_url) = lookup("OXYLABS_RESULTS_URL") {
            config.results_url = results_url;
        }
        if let Some(timeout) = lookup("OXYLABS_TIMEOUT").and_then(|s| s.parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(timeout);
        }
        if let Some(interval) =
            lookup("OXYLABS_POLL_INTERVAL_MS").and_then(|s| s.parse::<u64>().ok())
        {
            config.poll_interval = Duration::from_millis(interval);
        }
        if let Some(timeout) =
            lookup("OXYLABS_REQUEST_TIMEOUT").and_then(|s| s.parse::<u64>().ok())
        {
            config.request_timeout = Duration::from_secs(timeout);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_results_url(mut self, results_url: impl Into<String>) -> Self {
        self.results_url = results_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.credentials.username.is_empty() {
            return Err(ClientError::InvalidConfig("username cannot be empty".into()));
        }

        if self.credentials.password.is_empty() {
            return Err(ClientError::InvalidConfig("password cannot be empty".into()));
        }

        for (name, url) in [("base_url", &self.base_url), ("results_url", &self.results_url)] {
            let parsed = Url::parse(url)
                .map_err(|e| ClientError::InvalidConfig(format!("invalid {}: {}", name, e)))?;
            if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
                return Err(ClientError::InvalidConfig(format!(
                    "{} must be an http(s) URL with a host",
                    name
                )));
            }
        }

        if self.timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than 0".into(),
            ));
        }

        if self.poll_interval.is_zero() {
            return Err(ClientError::InvalidConfig(
                "poll_interval must be greater than 0".into(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "request_timeout must be greater than 0".into(),
            ));
        }

        if self.poll_interval > self.timeout {
            return Err(ClientError::InvalidConfig(
                "poll_interval cannot exceed timeout".into(),
            ));
        }

        Ok(())
    }
}
