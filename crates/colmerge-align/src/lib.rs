//! Input normalization for colmerge.
//!
//! Callers hand the engines a tabular [`Frame`](colmerge_types::Frame), a
//! list of sequence-like elements, or a single element. This crate resolves
//! that input once, at the boundary, into a list of [`Series`] sharing one
//! label domain.
//!
//! # Key Types
//!
//! - [`SequenceInput`] / [`SequenceKind`] -- One sequence-like element and its shape
//! - [`Candidates`] -- The whole input of an engine call
//! - [`Normalized`] -- Aligned series, or the singleton short-circuit
//!
//! [`Series`]: colmerge_types::Series

pub mod error;
pub mod input;
pub mod normalize;

pub use error::{AlignError, AlignResult};
pub use input::{Candidates, SequenceInput, SequenceKind};
pub use normalize::{normalize_for_coalesce, normalize_for_compare, Normalized};
