//! Error types for the coalescing crate.

use colmerge_align::AlignError;
use colmerge_types::{Label, TypeError};

/// Errors that can occur while coalescing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoalesceError {
    /// An option value was not recognized.
    #[error("unrecognized remaining-nulls option '{value}': expected one of {expected}")]
    InvalidArgument { value: String, expected: &'static str },

    /// Candidates were exhausted with missing values left.
    #[error("missing values still remain after merging at {} label(s)", .labels.len())]
    UnresolvedMissingValues { labels: Vec<Label> },

    /// The input could not be normalized.
    #[error(transparent)]
    Align(#[from] AlignError),

    /// An elementwise operation received misaligned series.
    #[error("type error: {0}")]
    Type(#[from] TypeError),
}

impl CoalesceError {
    /// Returns `true` if missing values remained under the raise policy.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::UnresolvedMissingValues { .. })
    }

    /// Returns `true` if the error is an unrecognized option value.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Convenience alias for coalescing results.
pub type CoalesceResult<T> = Result<T, CoalesceError>;
