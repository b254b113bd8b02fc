//! Resolve [`Candidates`] into aligned series.
//!
//! Comparison and coalescing align differently:
//!
//! - Comparison needs every element to describe the same positions: lengths
//!   must match, and labeled elements must share one label set. Mappings are
//!   not accepted.
//! - Coalescing aligns on the union of all labels, so differently-keyed
//!   sources can contribute values; only unlabeled elements must agree in
//!   length among themselves.

use colmerge_types::{union_labels, Label, Series};
use tracing::debug;

use crate::error::{AlignError, AlignResult};
use crate::input::{Candidates, SequenceInput, SequenceKind};

/// The outcome of normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum Normalized {
    /// A lone element given outside of a list; no alignment was performed.
    Singleton(Series),
    /// One or more series sharing identical labels in identical order.
    Aligned(Vec<Series>),
}

impl Normalized {
    /// The shared label domain.
    pub fn labels(&self) -> &[Label] {
        match self {
            Self::Singleton(s) => s.labels(),
            Self::Aligned(series) => series.first().map(|s| s.labels()).unwrap_or(&[]),
        }
    }

    /// Number of sequences.
    pub fn count(&self) -> usize {
        match self {
            Self::Singleton(_) => 1,
            Self::Aligned(series) => series.len(),
        }
    }
}

/// Normalize an input for elementwise comparison.
///
/// Every element must have the first element's length. Labeled elements
/// must carry the first element's label set and are reordered to match it.
pub fn normalize_for_compare(candidates: Candidates) -> AlignResult<Normalized> {
    let elements = match candidates {
        Candidates::Single(element) => return Ok(Normalized::Singleton(element.into_series()?)),
        Candidates::Frame(frame) => return frame_columns(frame.into_series()),
        Candidates::List(elements) => elements,
    };

    let expected = elements.first().ok_or(AlignError::EmptyInput)?.len();
    for (index, element) in elements.iter().enumerate() {
        if element.kind() == SequenceKind::Mapping {
            return Err(AlignError::UnsupportedElementType {
                index,
                kind: element.kind(),
            });
        }
        if element.len() != expected {
            return Err(AlignError::ShapeMismatch {
                index,
                expected,
                actual: element.len(),
            });
        }
    }

    let series = elements
        .into_iter()
        .map(SequenceInput::into_series)
        .collect::<Result<Vec<_>, _>>()?;

    let labels = series[0].labels().to_vec();
    let mut aligned = Vec::with_capacity(series.len());
    for (index, s) in series.into_iter().enumerate() {
        if s.labels() == labels.as_slice() {
            aligned.push(s);
        } else if s.has_same_label_set(&aligned[0]) {
            aligned.push(s.reindex_null(&labels));
        } else {
            return Err(AlignError::LabelMismatch { index });
        }
    }

    debug!(
        sequences = aligned.len(),
        labels = labels.len(),
        "normalized comparison input"
    );
    Ok(Normalized::Aligned(aligned))
}

/// Normalize an input for coalescing.
///
/// All elements are conformed to the union of their labels, in first-seen
/// order. A label missing from an element is null in that element.
pub fn normalize_for_coalesce(candidates: Candidates) -> AlignResult<Normalized> {
    let elements = match candidates {
        Candidates::Single(element) => return Ok(Normalized::Singleton(element.into_series()?)),
        Candidates::Frame(frame) => return frame_columns(frame.into_series()),
        Candidates::List(elements) => elements,
    };
    if elements.is_empty() {
        return Err(AlignError::EmptyInput);
    }

    let mut positional_len = None;
    for (index, element) in elements.iter().enumerate() {
        if element.kind().is_labeled() {
            continue;
        }
        match positional_len {
            None => positional_len = Some(element.len()),
            Some(expected) if expected != element.len() => {
                return Err(AlignError::ShapeMismatch {
                    index,
                    expected,
                    actual: element.len(),
                });
            }
            Some(_) => {}
        }
    }

    let series = elements
        .into_iter()
        .map(SequenceInput::into_series)
        .collect::<Result<Vec<_>, _>>()?;
    let labels = union_labels(&series);
    let aligned: Vec<Series> = series.iter().map(|s| s.reindex_null(&labels)).collect();

    debug!(
        sequences = aligned.len(),
        labels = labels.len(),
        "normalized coalesce input"
    );
    Ok(Normalized::Aligned(aligned))
}

fn frame_columns(columns: Vec<Series>) -> AlignResult<Normalized> {
    if columns.is_empty() {
        return Err(AlignError::EmptyInput);
    }
    Ok(Normalized::Aligned(columns))
}
