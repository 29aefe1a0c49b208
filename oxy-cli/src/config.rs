//! Configuration module
//!
//! Connection settings shared by every command, read from flags or the
//! environment.

use std::time::Duration;

use clap::Args;
use oxy_client::ClientConfig;
use oxy_client::config::{DEFAULT_BASE_URL, DEFAULT_RESULTS_URL};

/// API connection and polling settings
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// API username
    #[arg(long, env = "OXYLABS_USERNAME", global = true, default_value = "")]
    pub username: String,

    /// API password
    #[arg(
        long,
        env = "OXYLABS_PASSWORD",
        global = true,
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// Job submission URL
    #[arg(long, env = "OXYLABS_BASE_URL", global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Host serving job status and results
    #[arg(long, env = "OXYLABS_RESULTS_URL", global = true, default_value = DEFAULT_RESULTS_URL)]
    pub results_url: String,

    /// Seconds to wait for a job before giving up
    #[arg(long, env = "OXYLABS_TIMEOUT", global = true, default_value_t = 50)]
    pub timeout: u64,

    /// Milliseconds between status polls
    #[arg(long, env = "OXYLABS_POLL_INTERVAL_MS", global = true, default_value_t = 2000)]
    pub poll_interval_ms: u64,

    /// Seconds a single HTTP call may take
    #[arg(long, env = "OXYLABS_REQUEST_TIMEOUT", global = true, default_value_t = 30)]
    pub request_timeout: u64,
}

impl ConnectionArgs {
    /// Build the client configuration; validation happens when the client is created
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig::new(self.username.clone(), self.password.clone())
            .with_base_url(self.base_url.clone())
            .with_results_url(self.results_url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
            .with_poll_interval(Duration::from_millis(self.poll_interval_ms))
            .with_request_timeout(Duration::from_secs(self.request_timeout))
    }
}
