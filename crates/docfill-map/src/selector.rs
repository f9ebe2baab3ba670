//! Rendering strategy selection.
//!
//! Decisions walk a four-rung ladder and stop at the first acceptable rung:
//!
//! 1. Functional necessity (score 10): the content only renders correctly
//!    with this strategy.
//! 2. Quality enhancement (score >= 7): the strategy visibly improves output.
//! 3. Time savings (score >= 5): the strategy saves manual formatting work.
//! 4. Default: plain text (score 8).
//!
//! Selection is total; every input yields a decision.

use docfill_detect::estimated_minutes;
use docfill_model::{
    ColumnContentAnalysis, ComplexityTier, ConfidenceTier, ContentSelectionAnalysis,
    DecisionTier, Strategy, StrategyCandidate, StrategySelectionResult,
};

use crate::syntax::generate_syntax;

/// Column confidence required before markup is treated as a hard requirement.
const MARKUP_CONFIDENCE_MIN: f64 = 0.8;
/// Selection style opportunity that justifies styled text.
const STYLE_OPPORTUNITY_MIN: f64 = 0.6;
/// Selection image potential that justifies an image.
const IMAGE_POTENTIAL_MIN: f64 = 0.5;
const STYLED_TIME_MINUTES_MIN: f64 = 5.0;
const MARKUP_TIME_MINUTES_MIN: f64 = 3.0;
const DEFAULT_VALUE_SCORE: u8 = 8;
const DEFAULT_REASONING: &str = "content suitable for standard text processing";

/// A rung-specific decision before it is turned into a result.
#[derive(Debug, Clone)]
struct Decision {
    tier: DecisionTier,
    strategy: Strategy,
    secondary: Option<Strategy>,
    value_score: u8,
    reasoning: String,
}

impl Decision {
    fn new(tier: DecisionTier, strategy: Strategy, value_score: u8, reasoning: String) -> Self {
        Self {
            tier,
            strategy,
            secondary: None,
            value_score,
            reasoning,
        }
    }

    fn is_acceptable(&self) -> bool {
        self.value_score >= self.tier.min_value_score()
    }
}

fn functional_necessity(
    column: &ColumnContentAnalysis,
    selection: Option<&ContentSelectionAnalysis>,
) -> Vec<Decision> {
    let tier = DecisionTier::FunctionalNecessity;
    let mut decisions = Vec::new();
    if column.has_images {
        decisions.push(Decision::new(
            tier,
            Strategy::Image,
            10,
            "column values reference images, which only render as images".to_string(),
        ));
    }
    if column.has_markup && column.confidence_score > MARKUP_CONFIDENCE_MIN {
        decisions.push(Decision::new(
            tier,
            Strategy::RichHtml,
            10,
            "column values contain HTML markup that plain text would print literally".to_string(),
        ));
    }
    if selection.is_some_and(|s| s.has_complex_formatting && s.contains_tables) {
        decisions.push(Decision::new(
            tier,
            Strategy::RichHtml,
            10,
            "selection holds tables inside complex formatting, which need block HTML".to_string(),
        ));
    }
    decisions
}

fn quality_enhancement(
    column: &ColumnContentAnalysis,
    selection: Option<&ContentSelectionAnalysis>,
) -> Vec<Decision> {
    let tier = DecisionTier::QualityEnhancement;
    let style_opportunity = selection.map_or(0.0, |s| s.style_opportunity);
    let image_potential = selection.map_or(0.0, |s| s.image_potential);
    let mut decisions = Vec::new();

    if column.has_rich_formatting || style_opportunity > STYLE_OPPORTUNITY_MIN {
        let reasoning = if column.has_rich_formatting {
            "column values carry rich formatting that styled text preserves".to_string()
        } else {
            format!(
                "selection offers a strong styling opportunity ({:.0}%)",
                style_opportunity * 100.0
            )
        };
        decisions.push(Decision::new(tier, Strategy::StyledText, 8, reasoning));
    }
    if column.has_markup && column.complexity_tier == ComplexityTier::Moderate {
        let mut decision = Decision::new(
            tier,
            Strategy::RichHtml,
            7,
            "moderately complex markup renders best as block HTML".to_string(),
        );
        if column.has_rich_formatting {
            decision.secondary = Some(Strategy::StyledText);
        }
        decisions.push(decision);
    }
    if image_potential > IMAGE_POTENTIAL_MIN {
        decisions.push(Decision::new(
            tier,
            Strategy::Image,
            7,
            format!(
                "selection looks like an image slot ({:.0}% image potential)",
                image_potential * 100.0
            ),
        ));
    }
    decisions
}

fn time_savings(
    column: &ColumnContentAnalysis,
    _selection: Option<&ContentSelectionAnalysis>,
) -> Vec<Decision> {
    let tier = DecisionTier::TimeSavings;
    let minutes = column.estimated_time_saved_minutes;
    let mut decisions = Vec::new();

    if minutes >= STYLED_TIME_MINUTES_MIN && column.has_rich_formatting {
        decisions.push(Decision::new(
            tier,
            Strategy::StyledText,
            6,
            format!("styled text saves about {minutes:.1} minutes of manual rich formatting"),
        ));
    }
    if column.has_markup && minutes >= MARKUP_TIME_MINUTES_MIN {
        decisions.push(Decision::new(
            tier,
            Strategy::RichHtml,
            5,
            format!("rich HTML saves about {minutes:.1} minutes of markup clean-up"),
        ));
    }
    decisions
}

fn default_decision() -> Decision {
    Decision::new(
        DecisionTier::Default,
        Strategy::PlainText,
        DEFAULT_VALUE_SCORE,
        DEFAULT_REASONING.to_string(),
    )
}

/// A rung yields every branch that matches, in branch order.
type Rung = fn(&ColumnContentAnalysis, Option<&ContentSelectionAnalysis>) -> Vec<Decision>;

const LADDER: [Rung; 3] = [functional_necessity, quality_enhancement, time_savings];

fn ladder_decisions(
    column: &ColumnContentAnalysis,
    selection: Option<&ContentSelectionAnalysis>,
) -> impl Iterator<Item = Decision> {
    LADDER
        .iter()
        .flat_map(move |rung| rung(column, selection))
}

/// Human-readable benefit of rendering `column` with `strategy`.
pub fn estimated_benefit(strategy: Strategy, column: &ColumnContentAnalysis) -> String {
    match strategy {
        Strategy::PlainText => "reliable text substitution with no formatting overhead".to_string(),
        Strategy::RichHtml | Strategy::Image | Strategy::StyledText | Strategy::TabularData => {
            format!(
                "saves ~{:.1} min of manual formatting; quality gain {:.0}/10",
                estimated_minutes(strategy, column.complexity_tier),
                strategy.quality_gain()
            )
        }
    }
}

/// Every opportunity the ladder sees, in rung order, one per strategy.
///
/// Confidence is the rung's value score scaled to 0.0-1.0. The plain text
/// default is always listed last.
pub fn strategy_candidates(
    column: &ColumnContentAnalysis,
    selection: Option<&ContentSelectionAnalysis>,
) -> Vec<StrategyCandidate> {
    let mut candidates: Vec<StrategyCandidate> = Vec::new();
    let decisions = ladder_decisions(column, selection).chain(std::iter::once(default_decision()));

    for decision in decisions {
        if candidates.iter().any(|c| c.strategy == decision.strategy) {
            continue;
        }
        candidates.push(StrategyCandidate {
            strategy: decision.strategy,
            benefit_description: format!(
                "{} ({})",
                estimated_benefit(decision.strategy, column),
                decision.tier
            ),
            confidence: f64::from(decision.value_score) / 10.0,
        });
    }
    candidates
}

/// Picks the rendering strategy for a column and optional selection.
pub fn select_strategy(
    column: &ColumnContentAnalysis,
    selection: Option<&ContentSelectionAnalysis>,
) -> StrategySelectionResult {
    let decision = ladder_decisions(column, selection)
        .find(Decision::is_acceptable)
        .unwrap_or_else(default_decision);

    tracing::debug!(
        column = %column.identifier,
        strategy = %decision.strategy,
        tier = %decision.tier,
        value_score = decision.value_score,
        "Selected rendering strategy"
    );

    let key = column.placeholder_key();
    StrategySelectionResult {
        primary_strategy: decision.strategy,
        secondary_strategy: decision.secondary,
        estimated_benefit: estimated_benefit(decision.strategy, column),
        confidence_tier: ConfidenceTier::from_value_score(decision.value_score),
        strategy_weight: decision.strategy.weight(),
        decision_tier: decision.tier,
        generated_syntax: generate_syntax(&key, decision.strategy, None, None),
        value_score: decision.value_score,
        reasoning: decision.reasoning,
        aligned_from: None,
    }
}

/// Stateless strategy selection service.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategySelector;

impl StrategySelector {
    pub fn new() -> Self {
        Self
    }

    /// See [`select_strategy`].
    pub fn select(
        &self,
        column: &ColumnContentAnalysis,
        selection: Option<&ContentSelectionAnalysis>,
    ) -> StrategySelectionResult {
        select_strategy(column, selection)
    }

    /// See [`strategy_candidates`].
    pub fn candidates(
        &self,
        column: &ColumnContentAnalysis,
        selection: Option<&ContentSelectionAnalysis>,
    ) -> Vec<StrategyCandidate> {
        strategy_candidates(column, selection)
    }
}

#[cfg(test)]
mod tests {
    use docfill_model::DeclaredType;

    use super::*;

    fn column(images: bool, markup: bool, rich: bool) -> ColumnContentAnalysis {
        ColumnContentAnalysis {
            identifier: "A".to_string(),
            header_label: "Field".to_string(),
            sample_values: Vec::new(),
            declared_type: DeclaredType::String,
            has_images: images,
            has_markup: markup,
            has_rich_formatting: rich,
            complexity_tier: ComplexityTier::Simple,
            suggested_strategy: Strategy::PlainText,
            confidence_score: 0.95,
            estimated_time_saved_minutes: 0.0,
            estimated_quality_gain: 5.0,
        }
    }

    fn selection() -> ContentSelectionAnalysis {
        ContentSelectionAnalysis {
            start: 0,
            end: 10,
            text: "Some text.".to_string(),
            block_id: "p1".to_string(),
            style_descriptors: Vec::new(),
            has_complex_formatting: false,
            contains_lists: false,
            contains_tables: false,
            is_image_placeholder: false,
            style_opportunity: 0.0,
            markup_benefit: 0.1,
            image_potential: 0.0,
        }
    }

    #[test]
    fn test_images_are_functional_necessity() {
        let result = select_strategy(&column(true, true, true), None);
        assert_eq!(result.primary_strategy, Strategy::Image);
        assert_eq!(result.value_score, 10);
        assert_eq!(result.confidence_tier, ConfidenceTier::High);
        assert_eq!(result.decision_tier, DecisionTier::FunctionalNecessity);
    }

    #[test]
    fn test_low_confidence_markup_falls_to_later_rungs() {
        let mut analysis = column(false, true, false);
        analysis.confidence_score = 0.5;
        analysis.complexity_tier = ComplexityTier::Moderate;

        let result = select_strategy(&analysis, None);
        assert_eq!(result.primary_strategy, Strategy::RichHtml);
        assert_eq!(result.value_score, 7);
        assert_eq!(result.decision_tier, DecisionTier::QualityEnhancement);
    }

    #[test]
    fn test_markup_time_savings_is_medium_confidence() {
        let mut analysis = column(false, true, false);
        analysis.confidence_score = 0.5;
        analysis.complexity_tier = ComplexityTier::Simple;
        analysis.estimated_time_saved_minutes = 5.0;

        let result = select_strategy(&analysis, None);
        assert_eq!(result.primary_strategy, Strategy::RichHtml);
        assert_eq!(result.value_score, 5);
        assert_eq!(result.confidence_tier, ConfidenceTier::Medium);
        assert_eq!(result.decision_tier, DecisionTier::TimeSavings);
    }

    #[test]
    fn test_selection_tables_require_html() {
        let mut span = selection();
        span.has_complex_formatting = true;
        span.contains_tables = true;

        let result = select_strategy(&column(false, false, false), Some(&span));
        assert_eq!(result.primary_strategy, Strategy::RichHtml);
        assert_eq!(result.decision_tier, DecisionTier::FunctionalNecessity);
        assert_eq!(result.generated_syntax, "{~~Field}");
    }

    #[test]
    fn test_style_opportunity_selects_styled_text() {
        let mut span = selection();
        span.style_opportunity = 0.7;

        let result = select_strategy(&column(false, false, false), Some(&span));
        assert_eq!(result.primary_strategy, Strategy::StyledText);
        assert_eq!(result.value_score, 8);
        assert!(result.reasoning.contains("70%"));
    }

    #[test]
    fn test_image_potential_selects_image() {
        let mut span = selection();
        span.image_potential = 1.0;

        let result = select_strategy(&column(false, false, false), Some(&span));
        assert_eq!(result.primary_strategy, Strategy::Image);
        assert_eq!(result.value_score, 7);
        assert_eq!(result.generated_syntax, "{%Field}");
    }

    #[test]
    fn test_default_is_plain_text() {
        let result = select_strategy(&column(false, false, false), Some(&selection()));
        assert_eq!(result.primary_strategy, Strategy::PlainText);
        assert_eq!(result.value_score, 8);
        assert_eq!(result.confidence_tier, ConfidenceTier::High);
        assert_eq!(result.reasoning, "content suitable for standard text processing");
        assert_eq!(result.strategy_weight, 1);
    }

    #[test]
    fn test_candidates_list_every_opportunity_once() {
        let mut span = selection();
        span.image_potential = 0.9;
        let candidates = strategy_candidates(&column(false, false, true), Some(&span));

        let strategies: Vec<Strategy> = candidates.iter().map(|c| c.strategy).collect();
        assert_eq!(
            strategies,
            vec![Strategy::StyledText, Strategy::Image, Strategy::PlainText]
        );
        assert_eq!(candidates[0].confidence, 0.8);
        assert_eq!(candidates[1].confidence, 0.7);
    }

    #[test]
    fn test_candidates_cover_every_matching_branch() {
        let mut analysis = column(true, true, true);
        analysis.estimated_time_saved_minutes = 10.0;
        let mut span = selection();
        span.image_potential = 0.9;

        let strategies: Vec<Strategy> = strategy_candidates(&analysis, Some(&span))
            .iter()
            .map(|c| c.strategy)
            .collect();
        assert_eq!(
            strategies,
            vec![
                Strategy::Image,
                Strategy::RichHtml,
                Strategy::StyledText,
                Strategy::PlainText
            ]
        );

        let result = select_strategy(&analysis, Some(&span));
        assert_eq!(result.primary_strategy, Strategy::Image);
    }

    #[test]
    fn test_later_branch_in_rung_is_still_offered() {
        let mut analysis = column(false, true, false);
        analysis.confidence_score = 0.5;
        analysis.complexity_tier = ComplexityTier::Moderate;
        let mut span = selection();
        span.style_opportunity = 0.7;
        span.image_potential = 0.9;

        let strategies: Vec<Strategy> = strategy_candidates(&analysis, Some(&span))
            .iter()
            .map(|c| c.strategy)
            .collect();
        assert_eq!(
            strategies,
            vec![
                Strategy::StyledText,
                Strategy::RichHtml,
                Strategy::Image,
                Strategy::PlainText
            ]
        );
    }
}
