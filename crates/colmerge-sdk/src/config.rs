use colmerge_coalesce::RemainingNulls;
use colmerge_compare::NullPolicy;
use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

/// Options shared by every call made through a [`Reconciler`](crate::Reconciler).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// How missing values take part in agreement checks.
    pub null_policy: NullPolicy,
    /// What to do when coalescing leaves values missing.
    pub remaining_nulls: RemainingNulls,
}

impl ReconcileConfig {
    /// Missing values are compatible with anything and may remain after merging.
    pub fn permissive() -> Self {
        Self {
            null_policy: NullPolicy::Any,
            remaining_nulls: RemainingNulls::Ignore,
        }
    }

    /// Missing values never agree and must all be resolved by merging.
    pub fn strict() -> Self {
        Self {
            null_policy: NullPolicy::None,
            remaining_nulls: RemainingNulls::Raise,
        }
    }

    /// Parse from TOML text. Absent keys keep their defaults.
    pub fn from_toml_str(text: &str) -> SdkResult<Self> {
        toml::from_str(text).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Render as TOML text.
    pub fn to_toml_string(&self) -> SdkResult<String> {
        toml::to_string(self).map_err(|e| SdkError::Config(e.to_string()))
    }
}
