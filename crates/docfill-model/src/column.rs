//! Source column descriptors and their derived content analysis.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::enums::{ComplexityTier, ContentSignal, DeclaredType, Strategy};
use crate::error::{InputError, Result};

/// A single scalar sample taken from a data column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleValue {
    Null,
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl SampleValue {
    /// Textual content used for pattern detection.
    ///
    /// Returns `None` for nulls and blank text.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            SampleValue::Null => None,
            SampleValue::Boolean(value) => Some(Cow::Owned(value.to_string())),
            SampleValue::Number(value) => Some(Cow::Owned(value.to_string())),
            SampleValue::Text(value) if value.trim().is_empty() => None,
            SampleValue::Text(value) => Some(Cow::Borrowed(value.as_str())),
        }
    }

    /// True when the sample is free-form text (the only kind signals can match).
    pub fn is_text(&self) -> bool {
        matches!(self, SampleValue::Text(_))
    }
}

impl From<&str> for SampleValue {
    fn from(value: &str) -> Self {
        SampleValue::Text(value.to_string())
    }
}

impl From<String> for SampleValue {
    fn from(value: String) -> Self {
        SampleValue::Text(value)
    }
}

impl From<f64> for SampleValue {
    fn from(value: f64) -> Self {
        SampleValue::Number(value)
    }
}

impl From<bool> for SampleValue {
    fn from(value: bool) -> Self {
        SampleValue::Boolean(value)
    }
}

/// A data column as supplied by the spreadsheet reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Stable identifier of the column (e.g. "B" or a sheet-scoped id).
    pub identifier: String,
    /// Header text shown in the spreadsheet.
    #[serde(default)]
    pub header_label: String,
    /// First N values of the column, gathered by the caller.
    #[serde(default)]
    pub sample_values: Vec<SampleValue>,
    #[serde(default)]
    pub declared_type: DeclaredType,
}

impl ColumnDescriptor {
    pub fn new(identifier: impl Into<String>, header_label: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            header_label: header_label.into(),
            sample_values: Vec::new(),
            declared_type: DeclaredType::String,
        }
    }

    #[must_use]
    pub fn with_samples<I, V>(mut self, samples: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SampleValue>,
    {
        self.sample_values = samples.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_type(mut self, declared_type: DeclaredType) -> Self {
        self.declared_type = declared_type;
        self
    }

    /// Rejects structurally invalid descriptors.
    pub fn validate(&self) -> Result<()> {
        if sanitize_key(&self.identifier).is_empty() {
            return Err(InputError::MissingColumnIdentifier);
        }
        Ok(())
    }
}

/// Characters that delimit placeholders or their modifiers.
const RESERVED_KEY_CHARS: [char; 4] = ['{', '}', '"', ':'];
/// Prefixes that select a non-text placeholder form.
const RESERVED_KEY_PREFIXES: [char; 2] = ['%', '~'];

/// Strips placeholder delimiters and collapses whitespace.
fn sanitize_key(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| if RESERVED_KEY_CHARS.contains(&c) { ' ' } else { c })
        .collect();
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_start_matches(RESERVED_KEY_PREFIXES)
        .trim_start()
        .to_string()
}

/// Name used inside generated placeholders: the header label, or the
/// identifier when the header has nothing usable.
///
/// Placeholder delimiters (`{`, `}`, `"`, `:`) are removed and leading
/// `%`/`~` are dropped, so the key can never change the placeholder's form.
pub fn placeholder_key(identifier: &str, header_label: &str) -> String {
    let header = sanitize_key(header_label);
    if header.is_empty() {
        sanitize_key(identifier)
    } else {
        header
    }
}

/// Derived feature and classification summary of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnContentAnalysis {
    pub identifier: String,
    pub header_label: String,
    pub sample_values: Vec<SampleValue>,
    pub declared_type: DeclaredType,
    pub has_images: bool,
    pub has_markup: bool,
    pub has_rich_formatting: bool,
    pub complexity_tier: ComplexityTier,
    pub suggested_strategy: Strategy,
    /// Confidence in `suggested_strategy` (0.0 to 1.0).
    pub confidence_score: f64,
    pub estimated_time_saved_minutes: f64,
    /// Ceiling benefit of the suggested strategy (0 to 10).
    pub estimated_quality_gain: f64,
}

impl ColumnContentAnalysis {
    /// Placeholder name for this column.
    pub fn placeholder_key(&self) -> String {
        placeholder_key(&self.identifier, &self.header_label)
    }

    pub fn has_signal(&self, signal: ContentSignal) -> bool {
        match signal {
            ContentSignal::Image => self.has_images,
            ContentSignal::Markup => self.has_markup,
            ContentSignal::RichFormatting => self.has_rich_formatting,
        }
    }

    /// Weighted complexity score: 2 per image/markup signal, 1 for rich formatting.
    pub fn complexity_score(&self) -> u8 {
        ContentSignal::ALL
            .iter()
            .filter(|signal| self.has_signal(**signal))
            .map(ContentSignal::complexity_weight)
            .sum()
    }
}
