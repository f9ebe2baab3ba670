//! Batch request loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use docfill_model::{BatchOptions, BatchRequest};

/// Parses a batch request from JSON text.
pub fn parse_request(json: &str) -> Result<BatchRequest> {
    serde_json::from_str(json).context("parse batch request JSON")
}

/// Reads and parses a batch request file.
pub fn load_request(path: &Path) -> Result<BatchRequest> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("read batch request {}", path.display()))?;
    parse_request(&json).with_context(|| format!("invalid batch request {}", path.display()))
}

/// Applies command-line switches on top of the request's own options.
///
/// Switches only ever turn consistency off or optimization on.
pub fn apply_overrides(options: BatchOptions, no_consistency: bool, optimize: bool) -> BatchOptions {
    BatchOptions {
        consistency: options.consistency && !no_consistency,
        optimize: options.optimize || optimize,
    }
}
