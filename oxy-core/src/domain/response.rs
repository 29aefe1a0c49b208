//! Decoded result of a finished scraping job

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Terminal result delivered to the caller
///
/// `status_code` and `status` come from the HTTP response the results were
/// fetched with, not from the JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResponse {
    #[serde(skip)]
    pub status_code: u16,
    #[serde(skip)]
    pub status: String,
    pub results: Vec<ScrapeResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Value>,
}

/// One page of scraped output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResult {
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub parser_type: Option<String>,
}

/// Page content: raw HTML when parsing was off, a JSON structure otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Raw(String),
    Parsed(Value),
}

impl Default for Content {
    fn default() -> Self {
        Content::Parsed(Value::Null)
    }
}

impl Content {
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Content::Raw(html) => Some(html),
            Content::Parsed(_) => None,
        }
    }

    pub fn as_parsed(&self) -> Option<&Value> {
        match self {
            Content::Parsed(value) if !value.is_null() => Some(value),
            _ => None,
        }
    }
}

impl ScrapeResponse {
    /// Decode a results body and attach the HTTP status it was fetched with
    pub fn from_body(
        body: &[u8],
        status_code: u16,
        status: impl Into<String>,
    ) -> Result<Self, serde_json::Error> {
        let mut response: ScrapeResponse = serde_json::from_slice(body)?;
        response.status_code = status_code;
        response.status = status.into();
        Ok(response)
    }
}

impl ScrapeResult {
    /// Whether the provider reached the target page successfully
    pub fn is_success(&self) -> bool {
        self.status_code.is_none_or(|code| (200..300).contains(&code))
    }

    /// Parser outcome code, present on parsed content only
    pub fn parse_status_code(&self) -> Option<u64> {
        self.content
            .as_parsed()?
            .get("parse_status_code")
            .and_then(Value::as_u64)
    }

    /// Error messages the parser attached to the content
    pub fn errors(&self) -> Vec<&str> {
        self.content
            .as_parsed()
            .and_then(|content| content.get("_errors"))
            .and_then(Value::as_array)
            .map(|errors| errors.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}
