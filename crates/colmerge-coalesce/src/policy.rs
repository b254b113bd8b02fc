use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoalesceError;

/// What to do when candidates are exhausted and values are still missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemainingNulls {
    /// Fail with [`CoalesceError::UnresolvedMissingValues`].
    #[default]
    Raise,
    /// Return the partial result with an advisory attached and emit a
    /// `tracing` warning.
    Warn,
    /// Return the partial result silently.
    Ignore,
}

impl RemainingNulls {
    /// Accepted spellings, for error messages.
    pub const OPTIONS: &'static str = "['raise', 'warn', 'ignore']";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raise => "raise",
            Self::Warn => "warn",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for RemainingNulls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemainingNulls {
    type Err = CoalesceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raise" => Ok(Self::Raise),
            "warn" => Ok(Self::Warn),
            "ignore" => Ok(Self::Ignore),
            other => Err(CoalesceError::InvalidArgument {
                value: other.to_string(),
                expected: Self::OPTIONS,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        for option in [RemainingNulls::Raise, RemainingNulls::Warn, RemainingNulls::Ignore] {
            assert_eq!(option.as_str().parse::<RemainingNulls>().unwrap(), option);
        }
    }

    #[test]
    fn parse_unknown_option() {
        let err = "foobar".parse::<RemainingNulls>().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("'foobar'"));
    }

    #[test]
    fn default_is_raise() {
        assert_eq!(RemainingNulls::default(), RemainingNulls::Raise);
    }

    #[test]
    fn serde_lowercase() {
        let parsed: RemainingNulls = serde_json::from_str(r#""warn""#).unwrap();
        assert_eq!(parsed, RemainingNulls::Warn);
        assert!(serde_json::from_str::<RemainingNulls>(r#""Warn""#).is_err());
    }
}
