//! Foundation types for colmerge.
//!
//! This crate provides the null-aware scalar, label, and labeled-container
//! types that the comparison and coalescing engines operate on. Every other
//! colmerge crate depends on `colmerge-types`.
//!
//! # Key Types
//!
//! - [`Value`] -- Scalar cell value with a null marker (`Null`, or a NaN float)
//! - [`Label`] -- Key of a labeled sequence: synthetic position or explicit name
//! - [`Series`] -- Ordered label→value container with elementwise operators
//! - [`Frame`] -- Tabular container of equally-indexed named columns
//! - [`TypeError`] -- Shape and labeling errors raised by container operations

pub mod error;
pub mod frame;
pub mod label;
pub mod series;
pub mod value;

pub use error::{TypeError, TypeResult};
pub use frame::Frame;
pub use label::Label;
pub use series::{union_labels, Series};
pub use value::Value;
