//! Error types for the comparison crate.

use colmerge_align::AlignError;
use colmerge_types::TypeError;

/// Errors that can occur during a comparison.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    /// An option value was not recognized.
    #[error("unrecognized null policy '{value}': expected one of {expected}")]
    InvalidArgument { value: String, expected: &'static str },

    /// The input could not be normalized.
    #[error(transparent)]
    Align(#[from] AlignError),

    /// An elementwise operation received misaligned series.
    #[error("type error: {0}")]
    Type(#[from] TypeError),
}

impl CompareError {
    /// Returns `true` if the error is an unrecognized option value.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Convenience alias for comparison results.
pub type CompareResult<T> = Result<T, CompareError>;
