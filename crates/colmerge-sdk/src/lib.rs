//! High-level API for colmerge.
//!
//! Bundles the comparison and coalescing engines behind one configured
//! [`Reconciler`]. This is the main entry point for pipelines that check
//! several candidate sources for agreement and then merge them.

pub mod config;
pub mod error;
pub mod reconciler;

pub use config::ReconcileConfig;
pub use error::{SdkError, SdkResult};
pub use reconciler::Reconciler;

// Re-export key types
pub use colmerge_align::{AlignError, Candidates, SequenceInput, SequenceKind};
pub use colmerge_coalesce::{
    coalesce, coalesce_str, Advisory, CoalesceError, Coalesced, RemainingNulls,
};
pub use colmerge_compare::{
    compare_all, compare_all_reduced, compare_all_str, CompareError, NullPolicy,
};
pub use colmerge_types::{Frame, Label, Series, Value};
