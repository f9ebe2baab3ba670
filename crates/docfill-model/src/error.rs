//! Error types for structurally invalid engine input.

use thiserror::Error;

/// Fatal input errors.
///
/// Content problems (missing images, overly short selections, ...) are not
/// errors; they are reported as validation issues on the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Column descriptor has an empty (or delimiter-only) identifier.
    #[error("column identifier is missing")]
    MissingColumnIdentifier,

    /// Selection span ends before it starts.
    #[error("invalid selection span: end {end} is before start {start}")]
    InvalidSelectionSpan { start: usize, end: usize },

    /// A pair inside a batch request was invalid.
    #[error("batch pair {index}: {source}")]
    InBatch {
        index: usize,
        #[source]
        source: Box<InputError>,
    },
}

impl InputError {
    /// Wraps the error with the position of the offending batch pair.
    pub fn in_batch(self, index: usize) -> Self {
        Self::InBatch {
            index,
            source: Box::new(self),
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, InputError>;
