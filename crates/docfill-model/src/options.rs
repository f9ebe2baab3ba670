//! Configuration options for mapping and batch processing.

use serde::{Deserialize, Serialize};

use crate::enums::Alignment;

/// Inline style requested for styled-text placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background_color: Option<String>,
    pub color: Option<String>,
    /// Font size in points.
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub text_align: Option<Alignment>,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub fn with_text_align(mut self, alignment: Alignment) -> Self {
        self.text_align = Some(alignment);
        self
    }
}

/// Per-mapping rendering options supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingOptions {
    pub style: Option<StyleConfig>,
    /// Placement of image content; non-inline alignments produce block images.
    pub alignment: Option<Alignment>,
}

impl MappingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// Options controlling batch construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOptions {
    /// Run the consistency optimizer over the finished batch.
    pub consistency: bool,
    /// Pass every mapping through the optimization pass.
    pub optimize: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            consistency: true,
            optimize: false,
        }
    }
}

impl BatchOptions {
    #[must_use]
    pub fn with_consistency(mut self, enable: bool) -> Self {
        self.consistency = enable;
        self
    }

    #[must_use]
    pub fn with_optimize(mut self, enable: bool) -> Self {
        self.optimize = enable;
        self
    }
}
