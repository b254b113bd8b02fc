use colmerge_coalesce::CoalesceError;
use colmerge_compare::CompareError;
use colmerge_types::Label;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("comparison failed: {0}")]
    Compare(#[from] CompareError),

    #[error("coalesce failed: {0}")]
    Coalesce(#[from] CoalesceError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("candidates disagree at {} label(s)", .labels.len())]
    Disagreement { labels: Vec<Label> },
}

pub type SdkResult<T> = Result<T, SdkError>;
