//! Batch request and result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::ColumnDescriptor;
use crate::enums::Strategy;
use crate::mapping::Mapping;
use crate::options::{BatchOptions, MappingOptions};
use crate::selection::SelectionDescriptor;

/// One column-to-content pairing in a batch request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRequest {
    pub column: ColumnDescriptor,
    #[serde(default)]
    pub selection: Option<SelectionDescriptor>,
    #[serde(default)]
    pub options: MappingOptions,
}

impl MappingRequest {
    pub fn new(column: ColumnDescriptor, selection: Option<SelectionDescriptor>) -> Self {
        Self {
            column,
            selection,
            options: MappingOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: MappingOptions) -> Self {
        self.options = options;
        self
    }
}

/// Ordered pairings plus batch options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub pairs: Vec<MappingRequest>,
    #[serde(default)]
    pub options: BatchOptions,
}

/// Aggregate figures for a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_mappings: usize,
    pub per_strategy_counts: BTreeMap<Strategy, usize>,
    pub total_estimated_time_saved: f64,
    pub average_quality: f64,
    /// Mappings whose validation report raised at least one issue.
    pub mappings_with_issues: usize,
    pub recommendations: Vec<String>,
}

impl BatchSummary {
    pub fn count_for(&self, strategy: Strategy) -> usize {
        self.per_strategy_counts.get(&strategy).copied().unwrap_or(0)
    }
}

/// Mappings in batch order plus their summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub mappings: Vec<Mapping>,
    pub summary: BatchSummary,
}
