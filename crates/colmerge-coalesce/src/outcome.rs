use std::fmt;

use colmerge_types::{Label, Series};

/// A non-fatal note attached to a coalesced result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advisory {
    /// Candidates were exhausted with missing values left at these labels.
    UnresolvedMissing { labels: Vec<Label> },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedMissing { labels } => write!(
                f,
                "missing values still remain after merging at {} label(s)",
                labels.len()
            ),
        }
    }
}

/// The result of a coalesce call.
#[derive(Clone, Debug, PartialEq)]
pub struct Coalesced {
    /// The merged sequence.
    pub series: Series,
    /// For each position, the index of the candidate that supplied its value,
    /// or `None` if the position is still missing.
    pub filled_from: Vec<Option<usize>>,
    /// Advisories raised under the warn policy.
    pub advisories: Vec<Advisory>,
}

impl Coalesced {
    /// A result taken unchanged from a single candidate.
    pub(crate) fn verbatim(series: Series) -> Self {
        let filled_from = series
            .values()
            .iter()
            .map(|v| (!v.is_null()).then_some(0))
            .collect();
        Self {
            series,
            filled_from,
            advisories: Vec::new(),
        }
    }

    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }

    /// Labels still missing in the merged sequence.
    pub fn unresolved_labels(&self) -> Vec<Label> {
        self.series.is_null_mask().true_labels()
    }

    pub fn into_series(self) -> Series {
        self.series
    }
}
