//! Sequential fallback over candidate sequences.

use colmerge_align::{normalize_for_coalesce, AlignError, Candidates, Normalized};
use tracing::{debug, warn};

use crate::error::{CoalesceError, CoalesceResult};
use crate::outcome::{Advisory, Coalesced};
use crate::policy::RemainingNulls;

/// Merge candidates left to right, filling missing values.
///
/// The result starts as a copy of the first candidate. While positions are
/// still missing and candidates remain, the next candidate fills exactly
/// those positions. Candidates are aligned on the union of their labels, so
/// the result may be longer than any single candidate.
///
/// A lone element given outside of a list is returned unchanged.
pub fn coalesce(
    candidates: impl Into<Candidates>,
    on_remaining: RemainingNulls,
) -> CoalesceResult<Coalesced> {
    let candidates = match normalize_for_coalesce(candidates.into())? {
        Normalized::Singleton(series) => return Ok(Coalesced::verbatim(series)),
        Normalized::Aligned(candidates) => candidates,
    };
    let (first, rest) = candidates.split_first().ok_or(AlignError::EmptyInput)?;

    let mut merged = Coalesced::verbatim(first.clone());
    let mut missing = merged.series.is_null_mask();
    let mut consulted = 1usize;

    for (offset, candidate) in rest.iter().enumerate() {
        if !missing.any() {
            break;
        }
        let index = offset + 1;
        merged.series = merged.series.fill_where(&missing, candidate)?;
        for ((source, was_missing), value) in merged
            .filled_from
            .iter_mut()
            .zip(missing.values())
            .zip(merged.series.values())
        {
            if *was_missing && !value.is_null() {
                *source = Some(index);
            }
        }
        missing = merged.series.is_null_mask();
        consulted += 1;
    }

    debug!(
        candidates = candidates.len(),
        consulted,
        remaining = missing.count_true(),
        "coalesced candidates"
    );

    if !missing.any() {
        return Ok(merged);
    }

    let labels = missing.true_labels();
    match on_remaining {
        RemainingNulls::Raise => Err(CoalesceError::UnresolvedMissingValues { labels }),
        RemainingNulls::Warn => {
            warn!(
                remaining = labels.len(),
                "missing values still remain after merging"
            );
            merged.advisories.push(Advisory::UnresolvedMissing { labels });
            Ok(merged)
        }
        RemainingNulls::Ignore => Ok(merged),
    }
}

/// Like [`coalesce`], but parses the remaining-nulls option from its string
/// spelling first. An unrecognized spelling always fails.
pub fn coalesce_str(
    candidates: impl Into<Candidates>,
    on_remaining: &str,
) -> CoalesceResult<Coalesced> {
    let on_remaining = on_remaining.parse::<RemainingNulls>()?;
    coalesce(candidates, on_remaining)
}
