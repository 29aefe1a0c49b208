//! Core domain types
//!
//! Jobs as the provider reports them and the decoded result of a finished job.
//! Both are plain data; the client crate owns the HTTP calls that produce them.

pub mod job;
pub mod response;
