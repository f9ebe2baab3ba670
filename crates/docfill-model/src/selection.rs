//! Document content selections and their derived opportunity analysis.

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// A highlighted span of document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionDescriptor {
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// Identifier of the paragraph/block owning the span.
    #[serde(default)]
    pub block_id: String,
}

impl SelectionDescriptor {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.chars().count();
        Self {
            start: 0,
            end,
            text,
            block_id: String::new(),
        }
    }

    #[must_use]
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    #[must_use]
    pub fn with_block(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = block_id.into();
        self
    }

    /// Rejects spans that end before they start.
    pub fn validate(&self) -> Result<()> {
        if self.end < self.start {
            return Err(InputError::InvalidSelectionSpan {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Derived feature and opportunity summary of a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSelectionAnalysis {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub block_id: String,
    /// Style descriptors found in the text (e.g. "bold", "italic").
    pub style_descriptors: Vec<String>,
    pub has_complex_formatting: bool,
    pub contains_lists: bool,
    pub contains_tables: bool,
    pub is_image_placeholder: bool,
    /// 0.0 to 1.0
    pub style_opportunity: f64,
    /// 0.0 to 1.0
    pub markup_benefit: f64,
    /// 0.0 to 1.0
    pub image_potential: f64,
}

impl ContentSelectionAnalysis {
    /// Character count of the selected text.
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }

    /// Highest of the three opportunity scores.
    pub fn max_opportunity(&self) -> f64 {
        self.style_opportunity
            .max(self.markup_benefit)
            .max(self.image_potential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_spans_whole_text() {
        let selection = SelectionDescriptor::new("héllo");
        assert_eq!((selection.start, selection.end), (0, 5));
        assert!(selection.validate().is_ok());
    }

    #[test]
    fn reversed_span_is_rejected() {
        let selection = SelectionDescriptor::new("abc").with_span(7, 2);
        assert_eq!(
            selection.validate(),
            Err(InputError::InvalidSelectionSpan { start: 7, end: 2 })
        );
    }
}
