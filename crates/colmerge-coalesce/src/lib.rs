//! Left-to-right coalescing for colmerge.
//!
//! Combines several candidate sequences for the same field into one: the
//! first candidate is the primary source, and each following candidate only
//! fills positions that are still missing. A value once filled is never
//! replaced.

pub mod engine;
pub mod error;
pub mod outcome;
pub mod policy;

pub use engine::{coalesce, coalesce_str};
pub use error::{CoalesceError, CoalesceResult};
pub use outcome::{Advisory, Coalesced};
pub use policy::RemainingNulls;
