//! Request validation
//!
//! Everything here runs before a request is built, so a rejected request
//! never reaches the network.

use std::collections::HashSet;

use url::Url;

use super::options::{ContextOption, SearchOptions};
use crate::error::{ValidationError, ValidationResult};
use crate::source::Source;

/// Maximum results per page in per-page-limit mode
pub const MAX_LIMIT_PER_PAGE: u32 = 100;

/// Check that `input` is an absolute URL whose host contains `host`
///
/// # Example
/// ```
/// use oxy_core::request::validation::validate_url;
///
/// assert!(validate_url("https://www.google.com/search?q=x", "google").is_ok());
/// assert!(validate_url("https://evil.com", "google").is_err());
/// ```
pub fn validate_url(input: &str, host: &str) -> ValidationResult<Url> {
    if input.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let parsed = Url::parse(input).map_err(|e| ValidationError::InvalidUrl(e.to_string()))?;

    let Some(url_host) = parsed.host_str().filter(|h| !h.is_empty()) else {
        return Err(ValidationError::MissingHost);
    };

    if !url_host.contains(host) {
        return Err(ValidationError::HostMismatch {
            expected: host.to_string(),
        });
    }

    Ok(parsed)
}

/// Reject explicit pagination combined with `limit_per_page`
///
/// Runs on the caller's raw options, before defaults are applied.
pub fn check_pagination(options: &SearchOptions) -> ValidationResult<()> {
    if options.has_explicit_pagination() && options.limit_per_page().is_some() {
        return Err(ValidationError::ConflictingPagination);
    }
    Ok(())
}

/// Check every context option against the source and its own value range
pub fn check_context(source: Source, context: &[ContextOption]) -> ValidationResult<()> {
    let mut seen = HashSet::new();

    for option in context {
        let key = option.key();
        if !option.is_supported_by(source) {
            return Err(ValidationError::UnsupportedContext {
                key,
                source_name: source,
            });
        }
        if !seen.insert(key) {
            return Err(ValidationError::DuplicateContext(key));
        }
        check_context_value(option)?;
    }

    let price = |want_min: bool| {
        context.iter().find_map(|option| match option {
            ContextOption::MinPrice(p) if want_min => Some(*p),
            ContextOption::MaxPrice(p) if !want_min => Some(*p),
            _ => None,
        })
    };
    if let (Some(min), Some(max)) = (price(true), price(false)) {
        if min > max {
            return Err(ValidationError::invalid(
                "min_price",
                format!("{} is greater than max_price {}", min, max),
            ));
        }
    }

    Ok(())
}

fn check_context_value(option: &ContextOption) -> ValidationResult<()> {
    match option {
        ContextOption::Filter(n) if *n > 1 => {
            Err(ValidationError::invalid("filter", "must be 0 or 1"))
        }
        ContextOption::LimitPerPage(limits) if limits.is_empty() => Err(
            ValidationError::invalid("limit_per_page", "at least one page is required"),
        ),
        ContextOption::LimitPerPage(limits) => {
            for limit in limits {
                if limit.page == 0 {
                    return Err(ValidationError::invalid(
                        "limit_per_page",
                        "page numbers start at 1",
                    ));
                }
                if limit.limit == 0 || limit.limit > MAX_LIMIT_PER_PAGE {
                    return Err(ValidationError::invalid(
                        "limit_per_page",
                        format!("limit must be between 1 and {}", MAX_LIMIT_PER_PAGE),
                    ));
                }
            }
            Ok(())
        }
        ContextOption::ResultsLanguage(lang) if lang.is_empty() => {
            Err(ValidationError::invalid("results_language", "must not be empty"))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::options::PageLimit;

    #[test]
    fn test_valid_google_url() {
        let url = validate_url("https://www.google.com/search?q=x", "google").unwrap();
        assert_eq!(url.host_str(), Some("www.google.com"));
    }

    #[test]
    fn test_url_without_scheme() {
        assert!(matches!(
            validate_url("www.google.com/search", "google"),
            Err(ValidationError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_url_host_mismatch() {
        assert_eq!(
            validate_url("https://evil.com", "google").unwrap_err(),
            ValidationError::HostMismatch {
                expected: "google".to_string()
            }
        );
    }

    #[test]
    fn test_empty_url_and_missing_host() {
        assert_eq!(validate_url("", "google").unwrap_err(), ValidationError::EmptyUrl);
        assert_eq!(
            validate_url("mailto:someone@google.com", "google").unwrap_err(),
            ValidationError::MissingHost
        );
    }

    #[test]
    fn test_pagination_conflict() {
        let options = SearchOptions {
            pages: Some(2),
            ..Default::default()
        }
        .with_context(ContextOption::LimitPerPage(vec![PageLimit { page: 1, limit: 10 }]));
        assert_eq!(
            check_pagination(&options).unwrap_err(),
            ValidationError::ConflictingPagination
        );

        let per_page_only = SearchOptions::default()
            .with_context(ContextOption::LimitPerPage(vec![PageLimit { page: 1, limit: 10 }]));
        assert!(check_pagination(&per_page_only).is_ok());
    }

    #[test]
    fn test_unsupported_and_duplicate_context() {
        assert!(matches!(
            check_context(Source::BingSearch, &[ContextOption::Nfpr(true)]),
            Err(ValidationError::UnsupportedContext { key: "nfpr", .. })
        ));
        assert_eq!(
            check_context(
                Source::GoogleSearch,
                &[ContextOption::Tbm("isch".into()), ContextOption::Tbm("nws".into())]
            )
            .unwrap_err(),
            ValidationError::DuplicateContext("tbm")
        );
    }

    #[test]
    fn test_context_value_ranges() {
        assert!(check_context(Source::GoogleSearch, &[ContextOption::Filter(2)]).is_err());
        assert!(check_context(Source::GoogleSearch, &[ContextOption::Filter(1)]).is_ok());
        assert!(
            check_context(Source::GoogleSearch, &[ContextOption::LimitPerPage(vec![])]).is_err()
        );
        assert!(
            check_context(
                Source::GoogleSearch,
                &[ContextOption::LimitPerPage(vec![PageLimit { page: 1, limit: 101 }])]
            )
            .is_err()
        );
        assert!(
            check_context(
                Source::GoogleShoppingSearch,
                &[ContextOption::MinPrice(50), ContextOption::MaxPrice(10)]
            )
            .is_err()
        );
    }
}
