//! Command-line driver components for docfill.

pub mod logging;
pub mod request;
pub mod summary;
