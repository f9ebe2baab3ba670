//! Content signal detection for data columns and document selections.
//!
//! - [`column`]: column feature detection and classification
//! - [`selection`]: selection feature detection and opportunity scoring
//! - [`signals`]: per-signal pattern functions shared by both

pub mod column;
pub mod selection;
pub mod signals;

pub use column::{
    ColumnSignals, classify_column, detect_column_signals, estimated_minutes, suggest_strategy,
};
pub use selection::{analyze_selection, extract_style_descriptors};
pub use signals::detects;
