//! Advisory validation of column-to-content mappings.

pub mod issue;
pub mod validator;

pub use issue::{MIN_SELECTION_CHARS, ValidationIssue};
pub use validator::{ValidationReport, check_mapping, validate_mapping};
