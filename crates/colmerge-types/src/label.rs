use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of a single position in a [`Series`](crate::Series).
///
/// Unlabeled inputs (plain lists, tuples, arrays) receive synthetic
/// `Position` labels `0..n`. Labeled inputs carry `Name` labels. Both kinds
/// can coexist in a union of labels.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    /// Synthetic positional key.
    Position(usize),
    /// Explicit named key.
    Name(String),
}

impl Label {
    /// Returns `true` for synthetic positional labels.
    pub fn is_positional(&self) -> bool {
        matches!(self, Self::Position(_))
    }

    /// Positional labels `0..len`.
    pub fn range(len: usize) -> Vec<Label> {
        (0..len).map(Label::Position).collect()
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(p) => write!(f, "#{p}"),
            Self::Name(n) => write!(f, "{n:?}"),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(p) => write!(f, "{p}"),
            Self::Name(n) => write!(f, "{n}"),
        }
    }
}

impl From<usize> for Label {
    fn from(position: usize) -> Self {
        Self::Position(position)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_positional() {
        let labels = Label::range(3);
        assert_eq!(labels, vec![Label::Position(0), Label::Position(1), Label::Position(2)]);
        assert!(labels.iter().all(Label::is_positional));
    }

    #[test]
    fn display_format() {
        assert_eq!(Label::from(4).to_string(), "4");
        assert_eq!(Label::from("red").to_string(), "red");
    }

    #[test]
    fn serde_untagged() {
        let json = serde_json::to_string(&vec![Label::from(1), Label::from("a")]).unwrap();
        assert_eq!(json, r#"[1,"a"]"#);
        let parsed: Vec<Label> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![Label::Position(1), Label::Name("a".into())]);
    }
}
