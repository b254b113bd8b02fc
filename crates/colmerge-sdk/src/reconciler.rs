use colmerge_align::Candidates;
use colmerge_coalesce::{coalesce, Coalesced};
use colmerge_compare::{compare_all, mismatched_labels};
use colmerge_types::Series;
use tracing::debug;

use crate::config::ReconcileConfig;
use crate::error::{SdkError, SdkResult};

/// Configured entry point for agreement checks and coalescing.
#[derive(Clone, Debug, Default)]
pub struct Reconciler {
    config: ReconcileConfig,
}

impl Reconciler {
    pub fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    // ---- Agreement ----

    /// Elementwise agreement of all candidates under the configured policy.
    pub fn compare(&self, candidates: impl Into<Candidates>) -> SdkResult<Series<bool>> {
        Ok(compare_all(candidates, self.config.null_policy)?)
    }

    /// `true` iff the candidates agree at every position.
    pub fn agrees(&self, candidates: impl Into<Candidates>) -> SdkResult<bool> {
        Ok(self.compare(candidates)?.all())
    }

    // ---- Merging ----

    /// Coalesce candidates under the configured remaining-nulls policy.
    pub fn coalesce(&self, candidates: impl Into<Candidates>) -> SdkResult<Coalesced> {
        Ok(coalesce(candidates, self.config.remaining_nulls)?)
    }

    /// Coalesce candidates only if they agree everywhere.
    ///
    /// Fails with [`SdkError::Disagreement`] naming the labels at which the
    /// candidates disagree under the configured null policy.
    pub fn reconcile(&self, candidates: impl Into<Candidates>) -> SdkResult<Coalesced> {
        let candidates = candidates.into();
        let check = self.compare(candidates.clone())?;
        if !check.all() {
            let labels = mismatched_labels(&check);
            debug!(disagreements = labels.len(), "refusing to merge disagreeing candidates");
            return Err(SdkError::Disagreement { labels });
        }
        self.coalesce(candidates)
    }
}
