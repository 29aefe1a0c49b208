//! Validation errors raised while building a request

use thiserror::Error;

use crate::source::Source;

/// Result type alias for request building
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Reasons a request is rejected before anything is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Query string is empty
    #[error("query parameter is empty")]
    EmptyQuery,

    /// URL string is empty
    #[error("url parameter is empty")]
    EmptyUrl,

    /// URL could not be parsed as an absolute URL
    #[error("failed to parse URL: {0}")]
    InvalidUrl(String),

    /// URL parsed but has no host
    #[error("URL is missing a host")]
    MissingHost,

    /// URL host does not belong to the expected provider
    #[error("URL does not belong to {expected}")]
    HostMismatch {
        /// Substring the host had to contain
        expected: String,
    },

    /// Source does not take this kind of target
    #[error("source {source_name} does not accept a {target} target")]
    WrongTarget {
        source_name: Source,
        target: &'static str,
    },

    /// Explicit pagination combined with `limit_per_page`
    #[error(
        "limit, start_page and pages parameters cannot be used together with limit_per_page context parameter"
    )]
    ConflictingPagination,

    /// Context option not accepted by the source
    #[error("context option {key} is not supported by source {source_name}")]
    UnsupportedContext {
        key: &'static str,
        source_name: Source,
    },

    /// Same context key given more than once
    #[error("context option {0} given more than once")]
    DuplicateContext(&'static str),

    /// Parameter has a value outside its accepted range
    #[error("invalid value for {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

impl ValidationError {
    /// Create an invalid parameter error
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}
