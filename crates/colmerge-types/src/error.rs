use thiserror::Error;

use crate::label::Label;

/// Errors produced by container operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("duplicate label: {0}")]
    DuplicateLabel(Label),

    #[error("invalid length: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("can only combine identically-labeled series")]
    LabelMismatch,
}

/// Convenience alias for container results.
pub type TypeResult<T> = Result<T, TypeError>;
