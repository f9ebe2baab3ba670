//! Batch summary reporting.
//!
//! Aggregates per-strategy counts, time saved and quality across a batch of
//! mappings, and turns the totals into textual recommendations.

mod summary;

pub use summary::{
    HIGH_TIME_SAVINGS_MINUTES, LOW_PREMIUM_PLAIN_SHARE, recommendations, summarize,
};
