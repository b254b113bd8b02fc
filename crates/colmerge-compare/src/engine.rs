//! Elementwise comparison of N aligned sequences.
//!
//! [`NullPolicy::Any`] folds the pair rule over every unordered pair, so a
//! missing value anywhere is forgiven globally. [`NullPolicy::All`] and
//! [`NullPolicy::None`] fold it over adjacent pairs only. Their pair rules
//! are transitive, so the chain reaches the same verdict as every pair would;
//! the `Any` rule is not (a null matches both 1.0 and 2.0).

use colmerge_align::{normalize_for_compare, Candidates, Normalized};
use colmerge_types::{Label, Series};
use tracing::debug;

use crate::error::CompareResult;
use crate::policy::NullPolicy;

/// Compare all sequences elementwise under `policy`.
///
/// Returns one boolean per aligned label. A single sequence, whether given
/// alone or as a one-element list, compares equal to itself everywhere.
pub fn compare_all(
    candidates: impl Into<Candidates>,
    policy: NullPolicy,
) -> CompareResult<Series<bool>> {
    let series = match normalize_for_compare(candidates.into())? {
        Normalized::Singleton(s) => return Ok(Series::filled(s.labels().to_vec(), true)),
        Normalized::Aligned(series) => series,
    };

    let mut check = Series::filled(series[0].labels().to_vec(), true);
    let mut pairs = 0usize;
    if policy.is_all_pairs() {
        for (i, a) in series.iter().enumerate() {
            for b in &series[i + 1..] {
                check = check.and(&pair_mask(a, b, policy)?)?;
                pairs += 1;
            }
        }
    } else {
        for window in series.windows(2) {
            check = check.and(&pair_mask(&window[0], &window[1], policy)?)?;
            pairs += 1;
        }
    }

    debug!(
        %policy,
        sequences = series.len(),
        pairs,
        mismatches = check.len() - check.count_true(),
        "compared sequences"
    );
    Ok(check)
}

/// Like [`compare_all`], but parses the policy from its string spelling
/// first. An unrecognized spelling fails before any input is inspected.
pub fn compare_all_str(
    candidates: impl Into<Candidates>,
    policy: &str,
) -> CompareResult<Series<bool>> {
    let policy = policy.parse::<NullPolicy>()?;
    compare_all(candidates, policy)
}

/// `true` iff every position of [`compare_all`] is `true`.
pub fn compare_all_reduced(
    candidates: impl Into<Candidates>,
    policy: NullPolicy,
) -> CompareResult<bool> {
    compare_all(candidates, policy).map(|check| check.all())
}

/// Apply the pair rule of `policy` to two identically-labeled series.
pub fn pair_mask(a: &Series, b: &Series, policy: NullPolicy) -> CompareResult<Series<bool>> {
    Ok(a.zip_with(b, |x, y| policy.matches(x, y))?)
}

/// Labels at which a comparison result is `false`.
pub fn mismatched_labels(check: &Series<bool>) -> Vec<Label> {
    check.false_labels()
}
