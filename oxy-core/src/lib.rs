//! Oxy Core
//!
//! Core types for the Oxy scraping API client.
//!
//! This crate contains:
//! - Domain types: jobs as reported by the provider and decoded scrape results
//! - Request building: options, defaults and validation producing a `ScrapeRequest`
//!
//! Nothing in here performs I/O; the HTTP side lives in `oxy-client`.

pub mod domain;
pub mod error;
pub mod request;
pub mod source;

pub use error::{ValidationError, ValidationResult};
pub use source::Source;
