use std::collections::BTreeMap;

use docfill_model::{BatchSummary, Mapping, Strategy};
use docfill_validate::validate_mapping;

/// Share of plain text mappings above which premium strategies look underused.
pub const LOW_PREMIUM_PLAIN_SHARE: f64 = 0.7;
/// Total minutes saved above which the batch is called out as high value.
pub const HIGH_TIME_SAVINGS_MINUTES: f64 = 30.0;

/// Aggregates a batch into a summary.
///
/// An empty batch yields zero totals, an average quality of 0 and no
/// recommendations.
pub fn summarize(mappings: &[Mapping]) -> BatchSummary {
    let total_mappings = mappings.len();

    let mut per_strategy_counts: BTreeMap<Strategy, usize> = BTreeMap::new();
    for mapping in mappings {
        *per_strategy_counts
            .entry(mapping.primary_strategy())
            .or_insert(0) += 1;
    }

    let total_estimated_time_saved: f64 = mappings
        .iter()
        .map(|mapping| mapping.performance_benefit_minutes)
        .sum();

    let average_quality = if total_mappings == 0 {
        0.0
    } else {
        mappings.iter().map(|mapping| mapping.quality_score).sum::<f64>() / total_mappings as f64
    };

    let mappings_with_issues = mappings
        .iter()
        .filter(|mapping| {
            let report = validate_mapping(mapping);
            if !report.valid {
                tracing::warn!(
                    mapping = %mapping.id,
                    column = %mapping.column_analysis.identifier,
                    issues = report.issues.len(),
                    "Mapping needs review"
                );
            }
            !report.valid
        })
        .count();

    let plain_count = per_strategy_counts
        .get(&Strategy::PlainText)
        .copied()
        .unwrap_or(0);

    BatchSummary {
        total_mappings,
        recommendations: recommendations(
            total_mappings,
            plain_count,
            total_estimated_time_saved,
            mappings_with_issues,
        ),
        per_strategy_counts,
        total_estimated_time_saved,
        average_quality,
        mappings_with_issues,
    }
}

/// Recommendations for batch totals, in a fixed order: premium usage,
/// time savings, then issues to review.
pub fn recommendations(
    total_mappings: usize,
    plain_count: usize,
    total_minutes: f64,
    mappings_with_issues: usize,
) -> Vec<String> {
    let mut out = Vec::new();
    if total_mappings == 0 {
        return out;
    }

    let plain_share = plain_count as f64 / total_mappings as f64;
    if plain_share > LOW_PREMIUM_PLAIN_SHARE {
        out.push(format!(
            "Low Premium-style usage: {:.0}% of mappings use plain text; \
             consider styled text or rich HTML where the content allows",
            plain_share * 100.0
        ));
    }
    if total_minutes > HIGH_TIME_SAVINGS_MINUTES {
        out.push(format!(
            "High time savings: about {total_minutes:.1} minutes of manual formatting avoided"
        ));
    }
    if mappings_with_issues > 0 {
        out.push(format!(
            "Review {mappings_with_issues} mapping(s) with validation issues"
        ));
    }
    out
}
