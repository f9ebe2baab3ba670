//! Data model for the rendering strategy decision engine.

pub mod batch;
pub mod column;
pub mod enums;
pub mod error;
pub mod mapping;
pub mod options;
pub mod selection;

pub use batch::{BatchRequest, BatchResult, BatchSummary, MappingRequest};
pub use column::{ColumnContentAnalysis, ColumnDescriptor, SampleValue, placeholder_key};
pub use enums::{
    Alignment, ComplexityTier, ConfidenceTier, ContentSignal, DecisionTier, DeclaredType,
    MappingStatus, Strategy,
};
pub use error::{InputError, Result};
pub use mapping::{Mapping, MappingUpdate, StrategyCandidate, StrategySelectionResult};
pub use options::{BatchOptions, MappingOptions, StyleConfig};
pub use selection::{ContentSelectionAnalysis, SelectionDescriptor};
