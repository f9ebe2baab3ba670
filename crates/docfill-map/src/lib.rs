#![deny(unsafe_code)]

//! Rendering strategy decisions for column-to-content mappings.
//!
//! - [`selector`]: four-tier strategy selection
//! - [`syntax`]: placeholder generation and the optimization pass
//! - [`builder`]: single mapping lifecycle (create, update, optimize, validate)
//! - [`batch`]: ordered batch construction
//! - [`consistency`]: batch-wide strategy alignment

pub mod batch;
pub mod builder;
pub mod consistency;
pub mod selector;
pub mod syntax;

pub use batch::BatchCoordinator;
pub use builder::{MappingBuilder, quality_score};
pub use consistency::{modal_strategy, optimize_consistency};
pub use selector::{StrategySelector, estimated_benefit, select_strategy, strategy_candidates};
pub use syntax::{
    DEFAULT_STYLE_DECLARATIONS, generate_syntax, optimize_syntax, style_declarations,
};
