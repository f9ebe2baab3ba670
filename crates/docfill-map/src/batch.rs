//! Batch mapping construction.

use docfill_model::{BatchOptions, BatchRequest, BatchResult, MappingRequest, Result};
use docfill_report::summarize;

use crate::builder::MappingBuilder;
use crate::consistency::optimize_consistency;

/// Builds ordered batches of mappings.
///
/// The coordinator owns the order-index counter; successive calls to
/// [`BatchCoordinator::create`] keep counting upward.
#[derive(Debug, Clone, Default)]
pub struct BatchCoordinator {
    builder: MappingBuilder,
    options: BatchOptions,
    next_order_index: u32,
}

impl BatchCoordinator {
    pub fn new(options: BatchOptions) -> Self {
        Self {
            builder: MappingBuilder::new(),
            options,
            next_order_index: 0,
        }
    }

    pub fn options(&self) -> BatchOptions {
        self.options
    }

    /// Order index the next mapping will receive.
    pub fn next_order_index(&self) -> u32 {
        self.next_order_index
    }

    /// Runs a whole request with its own options on a fresh coordinator.
    pub fn run(request: &BatchRequest) -> Result<BatchResult> {
        Self::new(request.options).create(&request.pairs)
    }

    /// Builds one mapping per request, in order.
    ///
    /// Inputs are validated before any order index is consumed, so a failed
    /// batch leaves the counter where it was. Errors name the failing pair.
    pub fn create(&mut self, requests: &[MappingRequest]) -> Result<BatchResult> {
        let mut mappings = requests
            .iter()
            .enumerate()
            .map(|(index, request)| {
                self.builder
                    .create(
                        &request.column,
                        request.selection.as_ref(),
                        request.options.clone(),
                    )
                    .map_err(|err| err.in_batch(index))
            })
            .collect::<Result<Vec<_>>>()?;

        for mapping in &mut mappings {
            mapping.order_index = self.next_order_index;
            self.next_order_index += 1;
        }

        if self.options.optimize {
            for mapping in &mut mappings {
                self.builder.optimize(mapping);
            }
        }

        let reassigned = if self.options.consistency {
            optimize_consistency(&mut mappings)
        } else {
            0
        };

        let summary = summarize(&mappings);
        tracing::info!(
            mappings = summary.total_mappings,
            reassigned,
            with_issues = summary.mappings_with_issues,
            time_saved_minutes = summary.total_estimated_time_saved,
            average_quality = summary.average_quality,
            "Built mapping batch"
        );

        Ok(BatchResult { mappings, summary })
    }
}
