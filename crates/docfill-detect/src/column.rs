//! Column feature detection and classification.

use docfill_model::{
    ColumnContentAnalysis, ColumnDescriptor, ComplexityTier, ContentSignal, SampleValue, Strategy,
};

use crate::signals::detects;

/// Confidence when image references drive the suggestion.
const IMAGE_CONFIDENCE: f64 = 0.95;
/// Confidence when markup drives the suggestion.
const MARKUP_CONFIDENCE: f64 = 0.90;
/// Confidence when rich formatting drives the suggestion.
const RICH_FORMATTING_CONFIDENCE: f64 = 0.80;
/// Confidence of the plain text fallback.
const PLAIN_TEXT_CONFIDENCE: f64 = 0.95;

/// Boolean content signals of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSignals {
    pub has_images: bool,
    pub has_markup: bool,
    pub has_rich_formatting: bool,
}

impl ColumnSignals {
    fn set(&mut self, signal: ContentSignal) {
        match signal {
            ContentSignal::Image => self.has_images = true,
            ContentSignal::Markup => self.has_markup = true,
            ContentSignal::RichFormatting => self.has_rich_formatting = true,
        }
    }

    fn get(&self, signal: ContentSignal) -> bool {
        match signal {
            ContentSignal::Image => self.has_images,
            ContentSignal::Markup => self.has_markup,
            ContentSignal::RichFormatting => self.has_rich_formatting,
        }
    }

    /// Weighted complexity score: `2·images + 2·markup + 1·rich formatting`.
    pub fn complexity_score(&self) -> u8 {
        ContentSignal::ALL
            .iter()
            .filter(|signal| self.get(**signal))
            .map(ContentSignal::complexity_weight)
            .sum()
    }

    pub fn complexity_tier(&self) -> ComplexityTier {
        ComplexityTier::from_score(self.complexity_score())
    }
}

/// Detects content signals over the textual samples of a column.
///
/// Nulls, blanks, numbers and booleans never carry a signal; an empty
/// sample list yields no signals.
pub fn detect_column_signals(samples: &[SampleValue]) -> ColumnSignals {
    let mut signals = ColumnSignals::default();

    for sample in samples.iter().filter(|sample| sample.is_text()) {
        let Some(text) = sample.as_text() else {
            continue;
        };
        for signal in ContentSignal::ALL {
            if !signals.get(signal) && detects(signal, &text) {
                signals.set(signal);
            }
        }
        if ContentSignal::ALL.iter().all(|signal| signals.get(*signal)) {
            break;
        }
    }

    signals
}

/// Default strategy suggestion and its confidence for a set of signals.
///
/// First match wins: images, markup, rich formatting, then plain text.
pub fn suggest_strategy(signals: &ColumnSignals) -> (Strategy, f64) {
    if signals.has_images {
        (Strategy::Image, IMAGE_CONFIDENCE)
    } else if signals.has_markup {
        (Strategy::RichHtml, MARKUP_CONFIDENCE)
    } else if signals.has_rich_formatting {
        (Strategy::StyledText, RICH_FORMATTING_CONFIDENCE)
    } else {
        (Strategy::PlainText, PLAIN_TEXT_CONFIDENCE)
    }
}

/// Minutes of manual formatting a strategy saves at a complexity tier.
pub fn estimated_minutes(strategy: Strategy, tier: ComplexityTier) -> f64 {
    strategy.base_minutes() * tier.multiplier()
}

/// Builds the full content analysis for a column.
pub fn classify_column(column: &ColumnDescriptor) -> ColumnContentAnalysis {
    let signals = detect_column_signals(&column.sample_values);
    let complexity_tier = signals.complexity_tier();
    let (suggested_strategy, confidence_score) = suggest_strategy(&signals);

    tracing::debug!(
        column = %column.identifier,
        samples = column.sample_values.len(),
        has_images = signals.has_images,
        has_markup = signals.has_markup,
        has_rich_formatting = signals.has_rich_formatting,
        tier = %complexity_tier,
        strategy = %suggested_strategy,
        "Classified column"
    );

    ColumnContentAnalysis {
        identifier: column.identifier.clone(),
        header_label: column.header_label.clone(),
        sample_values: column.sample_values.clone(),
        declared_type: column.declared_type,
        has_images: signals.has_images,
        has_markup: signals.has_markup,
        has_rich_formatting: signals.has_rich_formatting,
        complexity_tier,
        suggested_strategy,
        confidence_score,
        estimated_time_saved_minutes: estimated_minutes(suggested_strategy, complexity_tier),
        estimated_quality_gain: suggested_strategy.quality_gain(),
    }
}

#[cfg(test)]
mod tests {
    use docfill_model::DeclaredType;

    use super::*;

    #[test]
    fn test_image_column() {
        let column = ColumnDescriptor::new("C", "Photo").with_samples(["photo1.jpg", "photo2.png"]);
        let analysis = classify_column(&column);

        assert!(analysis.has_images);
        assert!(!analysis.has_markup);
        assert_eq!(analysis.complexity_tier, ComplexityTier::Moderate);
        assert_eq!(analysis.suggested_strategy, Strategy::Image);
        assert_eq!(analysis.confidence_score, 0.95);
        assert_eq!(analysis.estimated_time_saved_minutes, 4.5);
        assert_eq!(analysis.estimated_quality_gain, 9.0);
    }

    #[test]
    fn test_markup_column() {
        let column = ColumnDescriptor::new("D", "Bio").with_samples(["<p>Hello <b>there</b></p>"]);
        let analysis = classify_column(&column);

        assert_eq!(analysis.suggested_strategy, Strategy::RichHtml);
        assert_eq!(analysis.confidence_score, 0.90);
        assert_eq!(analysis.complexity_tier, ComplexityTier::Moderate);
        assert_eq!(analysis.estimated_time_saved_minutes, 7.5);
    }

    #[test]
    fn test_rich_formatting_column() {
        let column = ColumnDescriptor::new("E", "Notes").with_samples(["**Key** point"]);
        let analysis = classify_column(&column);

        assert_eq!(analysis.suggested_strategy, Strategy::StyledText);
        assert_eq!(analysis.confidence_score, 0.80);
        assert_eq!(analysis.complexity_tier, ComplexityTier::Simple);
        assert_eq!(analysis.estimated_time_saved_minutes, 7.0);
        assert_eq!(analysis.estimated_quality_gain, 10.0);
    }

    #[test]
    fn test_every_signal_is_advanced() {
        let column = ColumnDescriptor::new("F", "Card")
            .with_samples(["<img src=\"logo.png\"/>", "**bold** text"]);
        let analysis = classify_column(&column);

        assert_eq!(analysis.complexity_score(), 5);
        assert_eq!(analysis.complexity_tier, ComplexityTier::Advanced);
        assert_eq!(analysis.suggested_strategy, Strategy::Image);
        assert_eq!(analysis.estimated_time_saved_minutes, 7.5);
    }

    #[test]
    fn test_empty_samples_default_to_plain_text() {
        let column = ColumnDescriptor::new("G", "Empty");
        let analysis = classify_column(&column);

        assert!(!analysis.has_images && !analysis.has_markup && !analysis.has_rich_formatting);
        assert_eq!(analysis.complexity_tier, ComplexityTier::Simple);
        assert_eq!(analysis.suggested_strategy, Strategy::PlainText);
        assert_eq!(analysis.confidence_score, 0.95);
        assert_eq!(analysis.estimated_time_saved_minutes, 0.0);
        assert_eq!(analysis.estimated_quality_gain, 5.0);
    }

    #[test]
    fn test_non_text_samples_carry_no_signal() {
        let column = ColumnDescriptor::new("H", "Amount")
            .with_type(DeclaredType::Number)
            .with_samples([SampleValue::Number(12.5), SampleValue::Null, SampleValue::Boolean(true)]);
        let signals = detect_column_signals(&column.sample_values);

        assert_eq!(signals, ColumnSignals::default());
    }
}
