//! Validation issue types.
//!
//! Issues are advisory data. Each variant carries only what its message
//! needs.

use serde::{Deserialize, Serialize};

/// Selections shorter than this (in characters) gain nothing from mapping.
pub const MIN_SELECTION_CHARS: usize = 3;

/// A problem found in a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Image strategy chosen for a column with no detected image data
    ImageDataMissing { column: String },
    /// Rich HTML chosen for a column without markup
    RichHtmlOverkill { column: String },
    /// Selected text is too short to benefit from any strategy
    SelectionTooShort { length: usize },
    /// The column has no sample values
    NoSampleData { column: String },
}

impl ValidationIssue {
    /// Stable identifier of the rule that raised the issue.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationIssue::ImageDataMissing { .. } => "image-data-missing",
            ValidationIssue::RichHtmlOverkill { .. } => "rich-html-overkill",
            ValidationIssue::SelectionTooShort { .. } => "selection-too-short",
            ValidationIssue::NoSampleData { .. } => "no-sample-data",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationIssue::ImageDataMissing { column } => {
                format!("Image strategy selected but no image data detected in column {column}")
            }
            ValidationIssue::RichHtmlOverkill { column } => {
                format!("Rich HTML may be overkill for column {column}: no markup detected")
            }
            ValidationIssue::SelectionTooShort { length } => {
                format!("Selection too short to benefit from mapping ({length} characters)")
            }
            ValidationIssue::NoSampleData { column } => {
                format!("No sample data available for column {column}")
            }
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            ValidationIssue::ImageDataMissing { .. } => {
                "Verify the column contains image paths, URLs or base64 data"
            }
            ValidationIssue::RichHtmlOverkill { .. } => "Consider StyledText for simple content",
            ValidationIssue::SelectionTooShort { .. } => "Use PlainText for very short selections",
            ValidationIssue::NoSampleData { .. } => "Verify the source data for this column",
        }
    }
}
