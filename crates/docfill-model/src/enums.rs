//! Type-safe enumerations for rendering strategy decisions.
//!
//! The rendering strategy, complexity tier and confidence tier are closed
//! sets; every consumer matches on them exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a column's values are rendered into document content.
///
/// Ordering follows declaration order and is used for stable per-strategy
/// aggregation (e.g. `BTreeMap<Strategy, usize>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Plain text substitution.
    PlainText,
    /// Rich markup (HTML) inserted as a block.
    #[serde(rename = "RichHTML")]
    RichHtml,
    /// Image inserted from a file path, URL or base64 payload.
    Image,
    /// Text with inline style declarations.
    StyledText,
    /// Tabular or typed data.
    TabularData,
}

impl Strategy {
    /// All strategies in declaration order.
    pub const ALL: [Strategy; 5] = [
        Strategy::PlainText,
        Strategy::RichHtml,
        Strategy::Image,
        Strategy::StyledText,
        Strategy::TabularData,
    ];

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::PlainText => "PlainText",
            Strategy::RichHtml => "RichHTML",
            Strategy::Image => "Image",
            Strategy::StyledText => "StyledText",
            Strategy::TabularData => "TabularData",
        }
    }

    /// Manual formatting minutes saved per column at the simple tier.
    pub fn base_minutes(&self) -> f64 {
        match self {
            Strategy::RichHtml => 5.0,
            Strategy::Image => 3.0,
            Strategy::StyledText => 7.0,
            Strategy::TabularData => 4.0,
            Strategy::PlainText => 0.0,
        }
    }

    /// Ceiling quality benefit of the strategy on a 0-10 scale.
    pub fn quality_gain(&self) -> f64 {
        match self {
            Strategy::RichHtml => 8.0,
            Strategy::Image => 9.0,
            Strategy::StyledText => 10.0,
            Strategy::TabularData => 10.0,
            Strategy::PlainText => 5.0,
        }
    }

    /// Dimensionless ranking weight. Carries no monetary meaning.
    pub fn weight(&self) -> u8 {
        match self {
            Strategy::PlainText => 1,
            Strategy::TabularData => 2,
            Strategy::StyledText => 3,
            Strategy::RichHtml => 4,
            Strategy::Image => 5,
        }
    }

    /// Short description of the placeholder shape the strategy produces.
    pub fn syntax_shape(&self) -> &'static str {
        match self {
            Strategy::PlainText | Strategy::TabularData => "{column}",
            Strategy::RichHtml => "{~~column}",
            Strategy::Image => "{%column} / {%%column}",
            Strategy::StyledText => "{column:style=\"...\"}",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    /// Parse a strategy name (case-insensitive, separators ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "PLAINTEXT" | "TEXT" => Ok(Strategy::PlainText),
            "RICHHTML" | "HTML" => Ok(Strategy::RichHtml),
            "IMAGE" => Ok(Strategy::Image),
            "STYLEDTEXT" | "STYLE" => Ok(Strategy::StyledText),
            "TABULARDATA" | "TABLE" => Ok(Strategy::TabularData),
            _ => Err(format!("Unknown strategy: {s}")),
        }
    }
}

/// Complexity of a column's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    Simple,
    Moderate,
    Advanced,
}

impl ComplexityTier {
    /// Maps a weighted complexity score to a tier.
    ///
    /// - score >= 4: advanced
    /// - 2 <= score < 4: moderate
    /// - otherwise: simple
    pub fn from_score(score: u8) -> Self {
        if score >= 4 {
            ComplexityTier::Advanced
        } else if score >= 2 {
            ComplexityTier::Moderate
        } else {
            ComplexityTier::Simple
        }
    }

    /// Multiplier applied to a strategy's base minutes.
    pub fn multiplier(&self) -> f64 {
        match self {
            ComplexityTier::Simple => 1.0,
            ComplexityTier::Moderate => 1.5,
            ComplexityTier::Advanced => 2.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityTier::Simple => "simple",
            ComplexityTier::Moderate => "moderate",
            ComplexityTier::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reliability of a strategy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// Categorizes a value score.
    ///
    /// - score >= 7: high
    /// - 5 <= score < 7: medium
    /// - otherwise: low
    pub fn from_value_score(score: u8) -> Self {
        if score >= 7 {
            ConfidenceTier::High
        } else if score >= 5 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which rung of the selection ladder produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionTier {
    /// The content cannot be rendered correctly any other way.
    FunctionalNecessity,
    /// The strategy visibly improves the generated document.
    QualityEnhancement,
    /// The strategy mainly saves manual formatting time.
    TimeSavings,
    /// Nothing better applies; plain text substitution.
    Default,
}

impl DecisionTier {
    /// Minimum value score a candidate needs to be accepted at this tier.
    pub fn min_value_score(&self) -> u8 {
        match self {
            DecisionTier::FunctionalNecessity => 10,
            DecisionTier::QualityEnhancement => 7,
            DecisionTier::TimeSavings => 5,
            DecisionTier::Default => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionTier::FunctionalNecessity => "functional necessity",
            DecisionTier::QualityEnhancement => "quality enhancement",
            DecisionTier::TimeSavings => "time savings",
            DecisionTier::Default => "default",
        }
    }
}

impl fmt::Display for DecisionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declared value type of a source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredType {
    #[default]
    String,
    Number,
    Date,
    Boolean,
}

/// Content signal detected in column samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSignal {
    /// File extensions, base64 image payloads, image URLs or image keywords.
    Image,
    /// HTML tags, entities or inline style attributes.
    Markup,
    /// Markdown emphasis, CSS keywords, paragraph breaks or list markers.
    RichFormatting,
}

impl ContentSignal {
    pub const ALL: [ContentSignal; 3] = [
        ContentSignal::Image,
        ContentSignal::Markup,
        ContentSignal::RichFormatting,
    ];

    /// Contribution of the signal to the complexity score.
    pub fn complexity_weight(&self) -> u8 {
        match self {
            ContentSignal::Image | ContentSignal::Markup => 2,
            ContentSignal::RichFormatting => 1,
        }
    }
}

/// Lifecycle state of a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingStatus {
    #[default]
    Draft,
    Optimized,
    /// Set only by the storage layer.
    Saved,
}

impl MappingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingStatus::Draft => "draft",
            MappingStatus::Optimized => "optimized",
            MappingStatus::Saved => "saved",
        }
    }
}

/// Placement requested for rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Inline,
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// True for alignments that keep content in the text flow.
    pub fn is_inline(&self) -> bool {
        matches!(self, Alignment::Inline | Alignment::Left)
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Inline | Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_round_trips_through_name() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("rich_html".parse::<Strategy>(), Ok(Strategy::RichHtml));
        assert!("video".parse::<Strategy>().is_err());
    }

    #[test]
    fn strategy_serializes_with_canonical_names() {
        let json = serde_json::to_string(&Strategy::RichHtml).unwrap();
        assert_eq!(json, "\"RichHTML\"");
    }

    #[test]
    fn complexity_thresholds() {
        assert_eq!(ComplexityTier::from_score(0), ComplexityTier::Simple);
        assert_eq!(ComplexityTier::from_score(1), ComplexityTier::Simple);
        assert_eq!(ComplexityTier::from_score(2), ComplexityTier::Moderate);
        assert_eq!(ComplexityTier::from_score(3), ComplexityTier::Moderate);
        assert_eq!(ComplexityTier::from_score(4), ComplexityTier::Advanced);
        assert_eq!(ComplexityTier::from_score(5), ComplexityTier::Advanced);
    }

    #[test]
    fn confidence_tier_from_value_score() {
        assert_eq!(ConfidenceTier::from_value_score(10), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_value_score(7), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_value_score(6), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_value_score(5), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_value_score(4), ConfidenceTier::Low);
    }

    #[test]
    fn alignment_inline_variants() {
        assert!(Alignment::Inline.is_inline());
        assert!(Alignment::Left.is_inline());
        assert!(!Alignment::Center.is_inline());
    }
}
