//! Strategy decisions and the mapping aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column::ColumnContentAnalysis;
use crate::enums::{ConfidenceTier, DecisionTier, MappingStatus, Strategy};
use crate::options::MappingOptions;
use crate::selection::{ContentSelectionAnalysis, SelectionDescriptor};

/// A strategy the selector considered, with the benefit it would bring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyCandidate {
    pub strategy: Strategy,
    pub benefit_description: String,
    /// 0.0 to 1.0
    pub confidence: f64,
}

/// Outcome of the strategy selection ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySelectionResult {
    pub primary_strategy: Strategy,
    pub secondary_strategy: Option<Strategy>,
    pub reasoning: String,
    /// 1 to 10
    pub value_score: u8,
    pub confidence_tier: ConfidenceTier,
    pub estimated_benefit: String,
    pub strategy_weight: u8,
    /// Ladder rung that produced the decision.
    pub decision_tier: DecisionTier,
    pub generated_syntax: String,
    /// Strategy the selector picked before batch consistency moved it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aligned_from: Option<Strategy>,
}

impl StrategySelectionResult {
    /// True when the strategy was required for the content to render at all.
    pub fn is_functional_necessity(&self) -> bool {
        self.decision_tier == DecisionTier::FunctionalNecessity
    }
}

/// The decision linking one column to one content region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub id: Uuid,
    pub column_analysis: ColumnContentAnalysis,
    pub selection_analysis: Option<ContentSelectionAnalysis>,
    pub selection_result: StrategySelectionResult,
    pub generated_syntax: String,
    /// 1.0 to 10.0
    pub quality_score: f64,
    pub performance_benefit_minutes: f64,
    pub enhancement_description: String,
    pub status: MappingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Position within the owning batch.
    pub order_index: u32,
    #[serde(default)]
    pub options: MappingOptions,
    /// Reserved; stored but not interpreted.
    #[serde(default)]
    pub ai_prompt_mode: Option<String>,
    /// Reserved; stored but not interpreted.
    #[serde(default)]
    pub ai_prompt: Option<String>,
    /// Reserved; stored but not interpreted.
    #[serde(default)]
    pub ai_enhanced_content: Option<String>,
    #[serde(default)]
    pub originating_block_id: Option<String>,
}

impl Mapping {
    pub fn primary_strategy(&self) -> Strategy {
        self.selection_result.primary_strategy
    }

    /// Placeholder name used in the generated syntax.
    pub fn placeholder_key(&self) -> String {
        self.column_analysis.placeholder_key()
    }
}

/// Changes applied by `MappingBuilder::update`.
///
/// `None` leaves a field untouched. For `selection`, `Some(None)` removes
/// the selection context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingUpdate {
    pub selection: Option<Option<SelectionDescriptor>>,
    pub options: Option<MappingOptions>,
    pub ai_prompt_mode: Option<String>,
    pub ai_prompt: Option<String>,
    pub ai_enhanced_content: Option<String>,
}

impl MappingUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_selection(mut self, selection: Option<SelectionDescriptor>) -> Self {
        self.selection = Some(selection);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: MappingOptions) -> Self {
        self.options = Some(options);
        self
    }
}
