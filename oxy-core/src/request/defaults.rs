//! Provider defaults for unset request parameters
//!
//! Each function returns the caller's value when it is set (non-zero,
//! non-empty) and the default otherwise.

use super::options::{SortBy, UserAgent};

pub const DOMAIN: &str = "com";
pub const START_PAGE: u32 = 1;
pub const PAGES: u32 = 1;
pub const LIMIT: u32 = 48;
pub const USER_AGENT: UserAgent = UserAgent::Desktop;
pub const SORT_BY: SortBy = SortBy::Relevance;

pub fn domain(value: Option<&str>) -> String {
    value
        .filter(|domain| !domain.is_empty())
        .unwrap_or(DOMAIN)
        .to_string()
}

pub fn start_page(value: Option<u32>) -> u32 {
    non_zero_or(value, START_PAGE)
}

pub fn pages(value: Option<u32>) -> u32 {
    non_zero_or(value, PAGES)
}

pub fn limit(value: Option<u32>) -> u32 {
    non_zero_or(value, LIMIT)
}

pub fn user_agent(value: Option<UserAgent>) -> UserAgent {
    value.unwrap_or(USER_AGENT)
}

fn non_zero_or(value: Option<u32>, default: u32) -> u32 {
    value.filter(|v| *v != 0).unwrap_or(default)
}
