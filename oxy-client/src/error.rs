//! Error types for the Oxy client

use std::time::Duration;

use oxy_core::ValidationError;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Oxy client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request rejected before anything was sent
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API answered with an unexpected status code
    #[error("error with status code {status_line}: {body}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Status line, e.g. "500 Internal Server Error"
        status_line: String,
        /// Raw response body
        body: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Provider reported the job as faulted
    #[error("there was an error processing your query (job {job_id})")]
    JobFaulted { job_id: String },

    /// Job did not finish within the polling budget
    #[error("timeout exceeded: {timeout:?}")]
    Timeout { timeout: Duration },

    /// Client configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ClientError {
    /// Create an API error from a status code and raw body
    pub fn api_error(status: StatusCode, body: &[u8]) -> Self {
        Self::ApiError {
            status: status.as_u16(),
            status_line: status.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Check if the job ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if the request was rejected before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}
