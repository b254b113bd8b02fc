//! Multi-way elementwise equality for colmerge.
//!
//! Compares any number of aligned sequences position by position and
//! reports where they agree, under one of three null-handling policies.
//!
//! # Key Types
//!
//! - [`NullPolicy`] -- How missing values take part in a comparison
//! - [`compare_all`] / [`compare_all_reduced`] -- Elementwise and reduced comparison
//! - [`pair_mask`] -- The per-pair rule applied by each policy

pub mod engine;
pub mod error;
pub mod policy;

pub use engine::{compare_all, compare_all_reduced, compare_all_str, mismatched_labels, pair_mask};
pub use error::{CompareError, CompareResult};
pub use policy::NullPolicy;
