//! Error types for the normalization crate.

use colmerge_types::TypeError;

use crate::input::SequenceKind;

/// Errors that can occur while normalizing engine inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    /// No sequences were supplied.
    #[error("list of sequences may not be empty")]
    EmptyInput,

    /// An element's length differs from the others.
    #[error(
        "lengths of all sequences must be equal: \
         element {index} has length {actual}, expected {expected}"
    )]
    ShapeMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// An element's labels cannot be aligned with the first element's.
    #[error("element {index} is not labeled identically to the first element")]
    LabelMismatch { index: usize },

    /// An element has a shape the operation does not accept.
    #[error("element {index} must be a series, list, tuple or array, got {kind} instead")]
    UnsupportedElementType { index: usize, kind: SequenceKind },

    /// Building a series from an element failed.
    #[error("invalid element: {0}")]
    Type(#[from] TypeError),
}

impl AlignError {
    /// Returns `true` for the error raised on zero candidates.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Returns `true` for length or label disagreement between elements.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. } | Self::LabelMismatch { .. })
    }
}

/// Convenience alias for normalization results.
pub type AlignResult<T> = Result<T, AlignError>;
