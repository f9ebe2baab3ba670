//! Mapping cross-checks.
//!
//! Every rule runs independently against the mapping's chosen strategy and
//! its analyses:
//!
//! - **Image data**: Image strategy on a column with no image signal.
//! - **Overkill**: RichHTML strategy on a column with no markup.
//! - **Selection length**: selected text shorter than three characters.
//! - **Sample data**: column with an empty sample list.
//!
//! Findings never block use of the generated syntax.

use docfill_model::{Mapping, Strategy};
use serde::{Deserialize, Serialize};

use crate::issue::{MIN_SELECTION_CHARS, ValidationIssue};

/// Outcome of validating one mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no rule raised an issue.
    pub valid: bool,
    pub issues: Vec<String>,
    /// One suggestion per issue, in the same order.
    pub suggestions: Vec<String>,
    /// The mapping's own quality score.
    pub quality_score: f64,
}

impl ValidationReport {
    fn from_issues(issues: &[ValidationIssue], quality_score: f64) -> Self {
        Self {
            valid: issues.is_empty(),
            issues: issues.iter().map(ValidationIssue::message).collect(),
            suggestions: issues
                .iter()
                .map(|issue| issue.suggestion().to_string())
                .collect(),
            quality_score,
        }
    }
}

/// Runs every rule and returns the typed findings in rule order.
pub fn check_mapping(mapping: &Mapping) -> Vec<ValidationIssue> {
    let column = &mapping.column_analysis;
    let mut issues = Vec::new();

    match mapping.primary_strategy() {
        Strategy::Image => {
            if !column.has_images {
                issues.push(ValidationIssue::ImageDataMissing {
                    column: column.identifier.clone(),
                });
            }
        }
        Strategy::RichHtml => {
            if !column.has_markup {
                issues.push(ValidationIssue::RichHtmlOverkill {
                    column: column.identifier.clone(),
                });
            }
        }
        Strategy::PlainText | Strategy::StyledText | Strategy::TabularData => {}
    }

    if let Some(selection) = &mapping.selection_analysis {
        let length = selection.text_length();
        if length < MIN_SELECTION_CHARS {
            issues.push(ValidationIssue::SelectionTooShort { length });
        }
    }

    if column.sample_values.is_empty() {
        issues.push(ValidationIssue::NoSampleData {
            column: column.identifier.clone(),
        });
    }

    issues
}

/// Validates a mapping into a report of messages and suggestions.
pub fn validate_mapping(mapping: &Mapping) -> ValidationReport {
    let issues = check_mapping(mapping);
    if !issues.is_empty() {
        tracing::debug!(
            mapping = %mapping.id,
            column = %mapping.column_analysis.identifier,
            issues = issues.len(),
            "Mapping has validation issues"
        );
    }
    ValidationReport::from_issues(&issues, mapping.quality_score)
}
