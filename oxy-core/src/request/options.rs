//! Caller-facing request options

use serde::Serialize;
use serde_json::{Value, json};

use super::defaults;
use crate::source::Source;

/// Device class the provider impersonates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAgent {
    Desktop,
    DesktopChrome,
    DesktopEdge,
    DesktopFirefox,
    DesktopOpera,
    DesktopSafari,
    Mobile,
    MobileAndroid,
    MobileIos,
    Tablet,
    TabletAndroid,
    TabletIos,
}

impl UserAgent {
    pub const ALL: [UserAgent; 12] = [
        UserAgent::Desktop,
        UserAgent::DesktopChrome,
        UserAgent::DesktopEdge,
        UserAgent::DesktopFirefox,
        UserAgent::DesktopOpera,
        UserAgent::DesktopSafari,
        UserAgent::Mobile,
        UserAgent::MobileAndroid,
        UserAgent::MobileIos,
        UserAgent::Tablet,
        UserAgent::TabletAndroid,
        UserAgent::TabletIos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserAgent::Desktop => "desktop",
            UserAgent::DesktopChrome => "desktop_chrome",
            UserAgent::DesktopEdge => "desktop_edge",
            UserAgent::DesktopFirefox => "desktop_firefox",
            UserAgent::DesktopOpera => "desktop_opera",
            UserAgent::DesktopSafari => "desktop_safari",
            UserAgent::Mobile => "mobile",
            UserAgent::MobileAndroid => "mobile_android",
            UserAgent::MobileIos => "mobile_ios",
            UserAgent::Tablet => "tablet",
            UserAgent::TabletAndroid => "tablet_android",
            UserAgent::TabletIos => "tablet_ios",
        }
    }
}

impl std::str::FromStr for UserAgent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserAgent::ALL
            .into_iter()
            .find(|ua| ua.as_str() == s)
            .ok_or_else(|| format!("unknown user agent type: {}", s))
    }
}

/// How the provider renders the page before returning it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Render {
    Html,
    Png,
}

impl std::str::FromStr for Render {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Render::Html),
            "png" => Ok(Render::Png),
            other => Err(format!("unknown render mode: {}", other)),
        }
    }
}

/// Result ordering for shopping searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortBy {
    #[serde(rename = "r")]
    Relevance,
    #[serde(rename = "rv")]
    ReviewScore,
    #[serde(rename = "p")]
    PriceAscending,
    #[serde(rename = "pd")]
    PriceDescending,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "r",
            SortBy::ReviewScore => "rv",
            SortBy::PriceAscending => "p",
            SortBy::PriceDescending => "pd",
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" | "relevance" => Ok(SortBy::Relevance),
            "rv" | "review" => Ok(SortBy::ReviewScore),
            "p" | "price" => Ok(SortBy::PriceAscending),
            "pd" | "price_desc" => Ok(SortBy::PriceDescending),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

/// Result count for one page in per-page-limit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLimit {
    pub page: u32,
    pub limit: u32,
}

/// Source-specific tuning sent in the payload `context` list
#[derive(Debug, Clone, PartialEq)]
pub enum ContextOption {
    ResultsLanguage(String),
    /// Similar-results filter, 0 or 1
    Filter(u8),
    /// Per-page result counts; replaces start_page/pages/limit
    LimitPerPage(Vec<PageLimit>),
    Nfpr(bool),
    SafeSearch(bool),
    Fpstate(String),
    Tbm(String),
    Tbs(String),
    SortBy(SortBy),
    MinPrice(u32),
    MaxPrice(u32),
}

impl ContextOption {
    /// Wire key in the context list
    pub fn key(&self) -> &'static str {
        match self {
            ContextOption::ResultsLanguage(_) => "results_language",
            ContextOption::Filter(_) => "filter",
            ContextOption::LimitPerPage(_) => "limit_per_page",
            ContextOption::Nfpr(_) => "nfpr",
            ContextOption::SafeSearch(_) => "safe_search",
            ContextOption::Fpstate(_) => "fpstate",
            ContextOption::Tbm(_) => "tbm",
            ContextOption::Tbs(_) => "tbs",
            ContextOption::SortBy(_) => "sort_by",
            ContextOption::MinPrice(_) => "min_price",
            ContextOption::MaxPrice(_) => "max_price",
        }
    }

    /// Wire value in the context list
    pub fn value(&self) -> Value {
        match self {
            ContextOption::ResultsLanguage(s)
            | ContextOption::Fpstate(s)
            | ContextOption::Tbm(s)
            | ContextOption::Tbs(s) => json!(s),
            ContextOption::Filter(n) => json!(n),
            ContextOption::LimitPerPage(limits) => json!(limits),
            ContextOption::Nfpr(b) | ContextOption::SafeSearch(b) => json!(b),
            ContextOption::SortBy(sort) => json!(sort.as_str()),
            ContextOption::MinPrice(n) | ContextOption::MaxPrice(n) => json!(n),
        }
    }

    /// Whether `source` accepts this option
    pub fn is_supported_by(&self, source: Source) -> bool {
        match source {
            Source::GoogleSearch => matches!(
                self,
                ContextOption::ResultsLanguage(_)
                    | ContextOption::Filter(_)
                    | ContextOption::LimitPerPage(_)
                    | ContextOption::Nfpr(_)
                    | ContextOption::SafeSearch(_)
                    | ContextOption::Fpstate(_)
                    | ContextOption::Tbm(_)
                    | ContextOption::Tbs(_)
            ),
            Source::GoogleShoppingSearch => matches!(
                self,
                ContextOption::ResultsLanguage(_)
                    | ContextOption::Nfpr(_)
                    | ContextOption::SortBy(_)
                    | ContextOption::MinPrice(_)
                    | ContextOption::MaxPrice(_)
            ),
            Source::BingSearch => false,
            Source::Google | Source::Bing | Source::GoogleShopping => false,
        }
    }
}

/// Options for query-based sources
///
/// Every field may be left unset; `with_defaults` fills in the provider
/// defaults. `None`, zero and empty strings all count as unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub domain: Option<String>,
    pub start_page: Option<u32>,
    pub pages: Option<u32>,
    pub limit: Option<u32>,
    pub geo_location: Option<String>,
    pub user_agent: Option<UserAgent>,
    pub parse: bool,
    pub render: Option<Render>,
    pub context: Vec<ContextOption>,
}

impl SearchOptions {
    pub fn with_context(mut self, option: ContextOption) -> Self {
        self.context.push(option);
        self
    }

    /// Any of start_page, pages or limit set to a non-zero value
    pub fn has_explicit_pagination(&self) -> bool {
        [self.start_page, self.pages, self.limit]
            .into_iter()
            .any(|value| value.is_some_and(|v| v != 0))
    }

    /// The `limit_per_page` context option, if given
    pub fn limit_per_page(&self) -> Option<&[PageLimit]> {
        self.context.iter().find_map(|option| match option {
            ContextOption::LimitPerPage(limits) => Some(limits.as_slice()),
            _ => None,
        })
    }

    /// Copy of these options with every unset field given its default
    ///
    /// Values the caller set are kept as they are.
    pub fn with_defaults(&self, source: Source) -> SearchOptions {
        let mut context = self.context.clone();
        if source.is_ecommerce()
            && !context
                .iter()
                .any(|option| matches!(option, ContextOption::SortBy(_)))
        {
            context.push(ContextOption::SortBy(defaults::SORT_BY));
        }

        SearchOptions {
            domain: Some(defaults::domain(self.domain.as_deref())),
            start_page: Some(defaults::start_page(self.start_page)),
            pages: Some(defaults::pages(self.pages)),
            limit: Some(defaults::limit(self.limit)),
            geo_location: non_empty(self.geo_location.as_deref()),
            user_agent: Some(defaults::user_agent(self.user_agent)),
            parse: self.parse,
            render: self.render,
            context,
        }
    }
}

/// Options for URL-based sources
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlOptions {
    pub user_agent: Option<UserAgent>,
    pub parse: bool,
    pub render: Option<Render>,
    pub geo_location: Option<String>,
    pub callback_url: Option<String>,
}

impl UrlOptions {
    /// Copy of these options with every unset field given its default
    pub fn with_defaults(&self) -> UrlOptions {
        UrlOptions {
            user_agent: Some(defaults::user_agent(self.user_agent)),
            parse: self.parse,
            render: self.render,
            geo_location: non_empty(self.geo_location.as_deref()),
            callback_url: non_empty(self.callback_url.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_options_get_defaults() {
        let resolved = SearchOptions::default().with_defaults(Source::GoogleSearch);
        assert_eq!(resolved.domain.as_deref(), Some("com"));
        assert_eq!(resolved.start_page, Some(1));
        assert_eq!(resolved.pages, Some(1));
        assert_eq!(resolved.limit, Some(48));
        assert_eq!(resolved.user_agent, Some(UserAgent::Desktop));
        assert!(resolved.context.is_empty());
    }

    #[test]
    fn test_zero_values_count_as_unset() {
        let options = SearchOptions {
            domain: Some(String::new()),
            start_page: Some(0),
            pages: Some(0),
            limit: Some(0),
            ..Default::default()
        };
        assert!(!options.has_explicit_pagination());

        let resolved = options.with_defaults(Source::GoogleSearch);
        assert_eq!(resolved.domain.as_deref(), Some("com"));
        assert_eq!(resolved.start_page, Some(1));
        assert_eq!(resolved.pages, Some(1));
        assert_eq!(resolved.limit, Some(48));
    }

    #[test]
    fn test_caller_values_are_kept() {
        let options = SearchOptions {
            domain: Some("de".to_string()),
            start_page: Some(3),
            pages: Some(2),
            limit: Some(10),
            user_agent: Some(UserAgent::MobileIos),
            ..Default::default()
        };
        let resolved = options.with_defaults(Source::GoogleSearch);
        assert_eq!(resolved.domain.as_deref(), Some("de"));
        assert_eq!(resolved.start_page, Some(3));
        assert_eq!(resolved.pages, Some(2));
        assert_eq!(resolved.limit, Some(10));
        assert_eq!(resolved.user_agent, Some(UserAgent::MobileIos));
    }

    #[test]
    fn test_with_defaults_leaves_caller_options_untouched() {
        let options = SearchOptions::default();
        let _ = options.with_defaults(Source::GoogleShoppingSearch);
        assert_eq!(options, SearchOptions::default());
    }

    #[test]
    fn test_shopping_search_defaults_sort_order() {
        let resolved = SearchOptions::default().with_defaults(Source::GoogleShoppingSearch);
        assert_eq!(resolved.context, vec![ContextOption::SortBy(SortBy::Relevance)]);

        let explicit = SearchOptions::default()
            .with_context(ContextOption::SortBy(SortBy::PriceDescending))
            .with_defaults(Source::GoogleShoppingSearch);
        assert_eq!(
            explicit.context,
            vec![ContextOption::SortBy(SortBy::PriceDescending)]
        );
    }

    #[test]
    fn test_context_values() {
        let limits = ContextOption::LimitPerPage(vec![PageLimit { page: 1, limit: 10 }]);
        assert_eq!(limits.key(), "limit_per_page");
        assert_eq!(limits.value(), json!([{"page": 1, "limit": 10}]));
        assert_eq!(ContextOption::SortBy(SortBy::ReviewScore).value(), json!("rv"));
        assert_eq!(ContextOption::Nfpr(true).value(), json!(true));
    }

    #[test]
    fn test_context_support() {
        assert!(ContextOption::Tbm("isch".into()).is_supported_by(Source::GoogleSearch));
        assert!(!ContextOption::Tbm("isch".into()).is_supported_by(Source::GoogleShoppingSearch));
        assert!(ContextOption::MinPrice(5).is_supported_by(Source::GoogleShoppingSearch));
        assert!(!ContextOption::SafeSearch(true).is_supported_by(Source::BingSearch));
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("tablet_ios".parse::<UserAgent>().unwrap(), UserAgent::TabletIos);
        assert!("toaster".parse::<UserAgent>().is_err());
        assert_eq!("png".parse::<Render>().unwrap(), Render::Png);
        assert_eq!("pd".parse::<SortBy>().unwrap(), SortBy::PriceDescending);
    }

    #[test]
    fn test_url_options_defaults() {
        let resolved = UrlOptions {
            callback_url: Some(String::new()),
            ..Default::default()
        }
        .with_defaults();
        assert_eq!(resolved.user_agent, Some(UserAgent::Desktop));
        assert!(resolved.callback_url.is_none());
    }
}
