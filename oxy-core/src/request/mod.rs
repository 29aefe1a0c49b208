//! Request building
//!
//! Turns a target (query or URL) plus caller options into an immutable,
//! validated `ScrapeRequest` whose JSON form is the job submission payload.
//!
//! # Example
//! ```
//! use oxy_core::request::{ScrapeRequest, SearchOptions};
//!
//! let request = ScrapeRequest::google_search("adidas", &SearchOptions::default()).unwrap();
//! assert_eq!(request.limit(), Some(48));
//! ```

pub mod defaults;
pub mod options;
pub mod validation;

pub use options::{ContextOption, PageLimit, Render, SearchOptions, SortBy, UrlOptions, UserAgent};

use serde::Serialize;
use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::source::Source;

/// What a job scrapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Query(String),
    Url(String),
}

impl Target {
    pub fn as_str(&self) -> &str {
        match self {
            Target::Query(s) | Target::Url(s) => s,
        }
    }
}

/// One `{key, value}` pair of the payload context list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextEntry {
    pub key: &'static str,
    pub value: Value,
}

/// A validated job submission
///
/// Only constructible through the builders below, which apply defaults and
/// reject invalid combinations. Serializes to the submission payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeRequest {
    source: Source,
    #[serde(flatten)]
    target: Target,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    geo_location: Option<String>,
    user_agent_type: UserAgent,
    parse: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    render: Option<Render>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    context: Vec<ContextEntry>,
}

impl ScrapeRequest {
    /// Build a request for a query-based source
    pub fn search(source: Source, query: &str, options: &SearchOptions) -> ValidationResult<Self> {
        if source.is_url_based() {
            return Err(ValidationError::WrongTarget {
                source_name: source,
                target: "query",
            });
        }
        if query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        validation::check_pagination(options)?;
        validation::check_context(source, &options.context)?;

        let resolved = options.with_defaults(source);
        let per_page_mode = resolved.limit_per_page().is_some();
        let pagination = |value: Option<u32>| if per_page_mode { None } else { value };

        Ok(Self {
            source,
            target: Target::Query(query.to_string()),
            domain: resolved.domain,
            start_page: pagination(resolved.start_page),
            pages: pagination(resolved.pages),
            limit: pagination(resolved.limit),
            geo_location: resolved.geo_location,
            user_agent_type: defaults::user_agent(resolved.user_agent),
            parse: resolved.parse,
            render: resolved.render,
            callback_url: None,
            context: resolved
                .context
                .iter()
                .map(|option| ContextEntry {
                    key: option.key(),
                    value: option.value(),
                })
                .collect(),
        })
    }

    /// Build a request for a URL-based source
    pub fn url(source: Source, url: &str, options: &UrlOptions) -> ValidationResult<Self> {
        if !source.is_url_based() {
            return Err(ValidationError::WrongTarget {
                source_name: source,
                target: "url",
            });
        }

        validation::validate_url(url, source.expected_host())?;

        let resolved = options.with_defaults();
        if let Some(callback) = &resolved.callback_url {
            url::Url::parse(callback)
                .map_err(|e| ValidationError::invalid("callback_url", e.to_string()))?;
        }

        Ok(Self {
            source,
            target: Target::Url(url.to_string()),
            domain: None,
            start_page: None,
            pages: None,
            limit: None,
            geo_location: resolved.geo_location,
            user_agent_type: defaults::user_agent(resolved.user_agent),
            parse: resolved.parse,
            render: resolved.render,
            callback_url: resolved.callback_url,
            context: Vec::new(),
        })
    }

    pub fn google_search(query: &str, options: &SearchOptions) -> ValidationResult<Self> {
        Self::search(Source::GoogleSearch, query, options)
    }

    pub fn google_url(url: &str, options: &UrlOptions) -> ValidationResult<Self> {
        Self::url(Source::Google, url, options)
    }

    pub fn bing_search(query: &str, options: &SearchOptions) -> ValidationResult<Self> {
        Self::search(Source::BingSearch, query, options)
    }

    pub fn bing_url(url: &str, options: &UrlOptions) -> ValidationResult<Self> {
        Self::url(Source::Bing, url, options)
    }

    pub fn google_shopping_search(query: &str, options: &SearchOptions) -> ValidationResult<Self> {
        Self::search(Source::GoogleShoppingSearch, query, options)
    }

    pub fn google_shopping_url(url: &str, options: &UrlOptions) -> ValidationResult<Self> {
        Self::url(Source::GoogleShopping, url, options)
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn start_page(&self) -> Option<u32> {
        self.start_page
    }

    pub fn pages(&self) -> Option<u32> {
        self.pages
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn user_agent(&self) -> UserAgent {
        self.user_agent_type
    }

    pub fn context(&self) -> &[ContextEntry] {
        &self.context
    }

    /// JSON submission payload
    pub fn to_payload(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
