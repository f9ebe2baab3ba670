//! Mapping construction and lifecycle.

use chrono::Utc;
use docfill_detect::{analyze_selection, classify_column, estimated_minutes};
use docfill_model::{
    ColumnContentAnalysis, ColumnDescriptor, ContentSelectionAnalysis, Mapping, MappingOptions,
    MappingStatus, MappingUpdate, Result, SelectionDescriptor, Strategy, StrategySelectionResult,
};
use docfill_validate::{ValidationReport, validate_mapping};
use uuid::Uuid;

use crate::selector::StrategySelector;
use crate::syntax::{generate_syntax, optimize_syntax};

/// Bonus when the selector also proposed a secondary strategy.
const SECONDARY_STRATEGY_BONUS: f64 = 1.0;
/// Bonus for plain text picked against a selection with nothing to gain.
const PLAIN_FIT_BONUS: f64 = 1.0;
/// Highest opportunity score a selection may have for the plain fit bonus.
const PLAIN_FIT_OPPORTUNITY_MAX: f64 = 0.3;
const OPTIMIZED_BONUS: f64 = 0.5;
const MIN_QUALITY: f64 = 1.0;
const MAX_QUALITY: f64 = 10.0;

/// Quality score of a decision, clamped to 1-10.
pub fn quality_score(
    result: &StrategySelectionResult,
    selection: Option<&ContentSelectionAnalysis>,
    optimized: bool,
) -> f64 {
    let strategy = result.primary_strategy;
    let mut score = strategy.quality_gain();
    if result.secondary_strategy.is_some() {
        score += SECONDARY_STRATEGY_BONUS;
    }
    if strategy == Strategy::PlainText
        && selection.is_some_and(|s| s.max_opportunity() <= PLAIN_FIT_OPPORTUNITY_MAX)
    {
        score += PLAIN_FIT_BONUS;
    }
    if optimized {
        score += OPTIMIZED_BONUS;
    }
    score.clamp(MIN_QUALITY, MAX_QUALITY)
}

/// Recomputes every field derived from the current decision.
///
/// Optimized mappings keep their optimized syntax. The selection result
/// always carries the same placeholder as the mapping.
pub(crate) fn refresh(mapping: &mut Mapping) {
    let key = mapping.placeholder_key();
    let strategy = mapping.primary_strategy();
    let optimized = mapping.status == MappingStatus::Optimized;
    let style = mapping.options.style.as_ref();
    let alignment = mapping.options.alignment;

    mapping.generated_syntax = if optimized {
        optimize_syntax(
            &key,
            strategy,
            style,
            alignment,
            &mapping.column_analysis,
            mapping.selection_analysis.as_ref(),
        )
    } else {
        generate_syntax(&key, strategy, style, alignment)
    };
    mapping
        .selection_result
        .generated_syntax
        .clone_from(&mapping.generated_syntax);
    mapping.quality_score = quality_score(
        &mapping.selection_result,
        mapping.selection_analysis.as_ref(),
        optimized,
    );
    mapping.performance_benefit_minutes =
        estimated_minutes(strategy, mapping.column_analysis.complexity_tier);
    mapping.enhancement_description = mapping.selection_result.estimated_benefit.clone();
}

fn originating_block(selection: Option<&ContentSelectionAnalysis>) -> Option<String> {
    selection
        .map(|s| s.block_id.trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Builds, updates, optimizes and validates mappings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MappingBuilder {
    selector: StrategySelector,
}

impl MappingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft mapping from raw descriptors.
    ///
    /// Fails only on structurally invalid input: a blank column identifier
    /// or a selection span that ends before it starts.
    pub fn create(
        &self,
        column: &ColumnDescriptor,
        selection: Option<&SelectionDescriptor>,
        options: MappingOptions,
    ) -> Result<Mapping> {
        column.validate()?;
        if let Some(selection) = selection {
            selection.validate()?;
        }

        let column_analysis = classify_column(column);
        let selection_analysis = selection.map(analyze_selection);
        Ok(self.create_from_analysis(column_analysis, selection_analysis, options))
    }

    /// Creates a draft mapping from analyses that were already computed.
    pub fn create_from_analysis(
        &self,
        column_analysis: ColumnContentAnalysis,
        selection_analysis: Option<ContentSelectionAnalysis>,
        options: MappingOptions,
    ) -> Mapping {
        let selection_result = self
            .selector
            .select(&column_analysis, selection_analysis.as_ref());
        let originating_block_id = originating_block(selection_analysis.as_ref());
        let now = Utc::now();

        let mut mapping = Mapping {
            id: Uuid::new_v4(),
            column_analysis,
            selection_analysis,
            selection_result,
            generated_syntax: String::new(),
            quality_score: MIN_QUALITY,
            performance_benefit_minutes: 0.0,
            enhancement_description: String::new(),
            status: MappingStatus::Draft,
            created_at: now,
            updated_at: now,
            order_index: 0,
            options,
            ai_prompt_mode: None,
            ai_prompt: None,
            ai_enhanced_content: None,
            originating_block_id,
        };
        refresh(&mut mapping);

        tracing::debug!(
            mapping = %mapping.id,
            column = %mapping.column_analysis.identifier,
            strategy = %mapping.primary_strategy(),
            quality = mapping.quality_score,
            "Created mapping"
        );
        mapping
    }

    /// Applies an update and re-derives the decision.
    ///
    /// The mapping returns to draft. On error the mapping is untouched.
    pub fn update(&self, mapping: &mut Mapping, update: MappingUpdate) -> Result<()> {
        if let Some(Some(selection)) = &update.selection {
            selection.validate()?;
        }

        let MappingUpdate {
            selection,
            options,
            ai_prompt_mode,
            ai_prompt,
            ai_enhanced_content,
        } = update;

        if let Some(selection) = selection {
            mapping.selection_analysis = selection.as_ref().map(analyze_selection);
            mapping.originating_block_id = originating_block(mapping.selection_analysis.as_ref());
        }
        if let Some(options) = options {
            mapping.options = options;
        }
        if ai_prompt_mode.is_some() {
            mapping.ai_prompt_mode = ai_prompt_mode;
        }
        if ai_prompt.is_some() {
            mapping.ai_prompt = ai_prompt;
        }
        if ai_enhanced_content.is_some() {
            mapping.ai_enhanced_content = ai_enhanced_content;
        }

        mapping.selection_result = self
            .selector
            .select(&mapping.column_analysis, mapping.selection_analysis.as_ref());
        mapping.status = MappingStatus::Draft;
        refresh(mapping);
        mapping.updated_at = Utc::now();

        tracing::debug!(
            mapping = %mapping.id,
            strategy = %mapping.primary_strategy(),
            "Updated mapping"
        );
        Ok(())
    }

    /// Applies the optimization pass and marks the mapping optimized.
    ///
    /// The primary strategy is kept. Running it again changes neither the
    /// syntax nor the quality score.
    pub fn optimize(&self, mapping: &mut Mapping) {
        mapping.status = MappingStatus::Optimized;
        refresh(mapping);
        mapping.updated_at = Utc::now();

        tracing::debug!(
            mapping = %mapping.id,
            syntax_len = mapping.generated_syntax.len(),
            quality = mapping.quality_score,
            "Optimized mapping"
        );
    }

    pub fn validate(&self, mapping: &Mapping) -> ValidationReport {
        validate_mapping(mapping)
    }
}
