//! Batch consistency optimization.
//!
//! Low-quality plain text mappings are pulled toward the strategy most of
//! the batch already uses. Mappings decided out of functional necessity are
//! never reassigned.

use chrono::Utc;
use docfill_model::{ConfidenceTier, DecisionTier, Mapping, Strategy};

use crate::builder::refresh;
use crate::selector::estimated_benefit;

/// Plain text mappings scoring below this are eligible for reassignment.
const REASSIGN_QUALITY_MAX: f64 = 6.0;

/// Most frequent primary strategy; ties go to the one seen first.
pub fn modal_strategy(mappings: &[Mapping]) -> Option<Strategy> {
    let mut counts: Vec<(Strategy, usize)> = Vec::new();
    for mapping in mappings {
        let strategy = mapping.primary_strategy();
        match counts.iter_mut().find(|(seen, _)| *seen == strategy) {
            Some((_, count)) => *count += 1,
            None => counts.push((strategy, 1)),
        }
    }

    let mut best: Option<(Strategy, usize)> = None;
    for (strategy, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((strategy, count));
        }
    }
    best.map(|(strategy, _)| strategy)
}

fn is_eligible(mapping: &Mapping) -> bool {
    !mapping.selection_result.is_functional_necessity()
        && mapping.primary_strategy() == Strategy::PlainText
        && mapping.quality_score < REASSIGN_QUALITY_MAX
}

/// Rung recorded on a reassigned decision.
const ALIGNED_TIER: DecisionTier = DecisionTier::QualityEnhancement;

fn reassign(mapping: &mut Mapping, strategy: Strategy) {
    let result = &mut mapping.selection_result;
    let previous = result.primary_strategy;
    let value_score = ALIGNED_TIER.min_value_score();

    result.aligned_from = Some(previous);
    result.primary_strategy = strategy;
    result.secondary_strategy = None;
    result.strategy_weight = strategy.weight();
    result.decision_tier = ALIGNED_TIER;
    result.value_score = value_score;
    result.confidence_tier = ConfidenceTier::from_value_score(value_score);
    result.estimated_benefit = estimated_benefit(strategy, &mapping.column_analysis);
    result.reasoning =
        format!("aligned with batch strategy {strategy} for a consistent document (was {previous})");

    refresh(mapping);
    mapping.updated_at = Utc::now();
}

/// Reassigns eligible mappings to the batch's modal strategy.
///
/// Returns how many mappings changed. Running it again on its own output
/// changes nothing.
pub fn optimize_consistency(mappings: &mut [Mapping]) -> usize {
    let Some(modal) = modal_strategy(mappings) else {
        return 0;
    };
    if modal == Strategy::PlainText {
        return 0;
    }

    let mut reassigned = 0;
    for mapping in mappings.iter_mut().filter(|mapping| is_eligible(mapping)) {
        reassign(mapping, modal);
        reassigned += 1;
    }

    tracing::debug!(
        modal = %modal,
        reassigned,
        total = mappings.len(),
        "Applied batch consistency"
    );
    reassigned
}
