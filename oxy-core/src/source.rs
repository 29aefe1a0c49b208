//! Scraping sources offered by the provider

use serde::{Deserialize, Serialize};

/// A provider scraping source
///
/// Each source either takes a free-text query or a URL on a specific host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    GoogleSearch,
    Google,
    BingSearch,
    Bing,
    GoogleShoppingSearch,
    GoogleShopping,
}

impl Source {
    /// All known sources
    pub const ALL: [Source; 6] = [
        Source::GoogleSearch,
        Source::Google,
        Source::BingSearch,
        Source::Bing,
        Source::GoogleShoppingSearch,
        Source::GoogleShopping,
    ];

    /// Wire name sent in the `source` payload field
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::GoogleSearch => "google_search",
            Source::Google => "google",
            Source::BingSearch => "bing_search",
            Source::Bing => "bing",
            Source::GoogleShoppingSearch => "google_shopping_search",
            Source::GoogleShopping => "google_shopping",
        }
    }

    /// Whether the source scrapes a URL rather than a query
    pub fn is_url_based(&self) -> bool {
        matches!(
            self,
            Source::Google | Source::Bing | Source::GoogleShopping
        )
    }

    /// Substring a target URL host must contain for URL sources
    pub fn expected_host(&self) -> &'static str {
        match self {
            Source::Google | Source::GoogleSearch => "google",
            Source::GoogleShopping | Source::GoogleShoppingSearch => "google",
            Source::Bing | Source::BingSearch => "bing",
        }
    }

    /// Whether the source belongs to the e-commerce family
    pub fn is_ecommerce(&self) -> bool {
        matches!(self, Source::GoogleShoppingSearch | Source::GoogleShopping)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| format!("unknown source: {}", s))
    }
}
