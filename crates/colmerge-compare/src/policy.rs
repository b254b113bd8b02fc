use std::fmt;
use std::str::FromStr;

use colmerge_types::Value;
use serde::{Deserialize, Serialize};

use crate::error::CompareError;

/// How missing values take part in a multi-way comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullPolicy {
    /// A missing value matches anything. Every pair of sequences is
    /// inspected, so the result does not depend on input order.
    #[default]
    Any,
    /// A missing value matches only another missing value. Sequences are
    /// compared along an adjacent chain `(s1, s2), (s2, s3), ...`.
    All,
    /// A missing value matches nothing, not even another missing value.
    /// Compared along the same adjacent chain as [`NullPolicy::All`].
    None,
}

impl NullPolicy {
    /// Accepted spellings, for error messages.
    pub const OPTIONS: &'static str = "['any', 'all', 'none']";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
            Self::None => "none",
        }
    }

    /// Returns `true` if the policy compares every pair of sequences rather
    /// than the adjacent chain.
    pub fn is_all_pairs(self) -> bool {
        matches!(self, Self::Any)
    }

    /// Whether two single values agree under this policy.
    pub fn matches(self, a: &Value, b: &Value) -> bool {
        match self {
            Self::Any => a.strict_eq(b) || a.is_null() || b.is_null(),
            Self::All => a.strict_eq(b) || (a.is_null() && b.is_null()),
            Self::None => a.strict_eq(b),
        }
    }
}

impl fmt::Display for NullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NullPolicy {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::Any),
            "all" => Ok(Self::All),
            "none" => Ok(Self::None),
            other => Err(CompareError::InvalidArgument {
                value: other.to_string(),
                expected: Self::OPTIONS,
            }),
        }
    }
}
