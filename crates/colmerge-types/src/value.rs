use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// `Null` is the missing marker. A `Float` holding NaN is treated as missing
/// as well, so float columns read from external sources behave the same way
/// as explicitly nulled ones.
///
/// Two notions of equality exist:
///
/// - `==` ([`PartialEq`]) is *identity*: two missing values are identical,
///   which makes whole-series assertions straightforward.
/// - [`Value::strict_eq`] is *elementwise comparison*: a missing value never
///   equals anything, not even another missing value.
///
/// In both, `Int` and `Float` compare by exact numeric value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Returns `true` for the missing marker (`Null` or a NaN float).
    pub fn is_null(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Elementwise equality: `false` whenever either side is missing.
    pub fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => int_eq_float(*a, *b),
            (Self::Str(a), Self::Str(b)) => a == b,
            _ => false,
        }
    }

}

/// Exact comparison of an integer with a float, without rounding either.
fn int_eq_float(a: i64, b: f64) -> bool {
    // 2^63 is exactly representable; i64 covers [-2^63, 2^63).
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    b.fract() == 0.0 && (-BOUND..BOUND).contains(&b) && a == b as i64
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        (self.is_null() && other.is_null()) || self.strict_eq(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            v if v.is_null() => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}
