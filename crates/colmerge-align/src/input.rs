use std::collections::BTreeMap;
use std::fmt;

use colmerge_types::{Frame, Label, Series, TypeResult, Value};

/// The runtime shape of a [`SequenceInput`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    Series,
    List,
    Tuple,
    Array,
    Mapping,
}

impl SequenceKind {
    /// Returns `true` for shapes that carry their own labels.
    pub fn is_labeled(self) -> bool {
        matches!(self, Self::Series | Self::Mapping)
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Series => write!(f, "series"),
            Self::List => write!(f, "list"),
            Self::Tuple => write!(f, "tuple"),
            Self::Array => write!(f, "array"),
            Self::Mapping => write!(f, "mapping"),
        }
    }
}

/// One sequence-like element of an engine input.
///
/// `List`, `Tuple` and `Array` are unlabeled and receive positional labels;
/// `Labeled` and `Mapping` keep their own labels.
#[derive(Clone, Debug, PartialEq)]
pub enum SequenceInput {
    Labeled(Series),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Array(Vec<Value>),
    Mapping(Vec<(Label, Value)>),
}

impl SequenceInput {
    pub fn kind(&self) -> SequenceKind {
        match self {
            Self::Labeled(_) => SequenceKind::Series,
            Self::List(_) => SequenceKind::List,
            Self::Tuple(_) => SequenceKind::Tuple,
            Self::Array(_) => SequenceKind::Array,
            Self::Mapping(_) => SequenceKind::Mapping,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Labeled(s) => s.len(),
            Self::List(v) | Self::Tuple(v) | Self::Array(v) => v.len(),
            Self::Mapping(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert into a series. Fails only for a mapping with duplicate keys.
    pub fn into_series(self) -> TypeResult<Series> {
        match self {
            Self::Labeled(s) => Ok(s),
            Self::List(v) | Self::Tuple(v) | Self::Array(v) => Ok(Series::from_values(v)),
            Self::Mapping(pairs) => Series::from_pairs(pairs),
        }
    }

    /// Build a mapping from `(key, value)` pairs.
    pub fn mapping<L, V, I>(pairs: I) -> Self
    where
        L: Into<Label>,
        V: Into<Value>,
        I: IntoIterator<Item = (L, V)>,
    {
        Self::Mapping(
            pairs
                .into_iter()
                .map(|(l, v)| (l.into(), v.into()))
                .collect(),
        )
    }
}

impl From<Series> for SequenceInput {
    fn from(series: Series) -> Self {
        Self::Labeled(series)
    }
}

impl From<Vec<Value>> for SequenceInput {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

impl<const N: usize> From<[Value; N]> for SequenceInput {
    fn from(values: [Value; N]) -> Self {
        Self::Array(values.into())
    }
}

impl From<BTreeMap<String, Value>> for SequenceInput {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::mapping(map)
    }
}

/// The complete input of an engine call.
#[derive(Clone, Debug, PartialEq)]
pub enum Candidates {
    /// Each column of the frame is one sequence.
    Frame(Frame),
    /// An explicit list of sequences, in priority order.
    List(Vec<SequenceInput>),
    /// A lone sequence, compared or merged against nothing.
    Single(SequenceInput),
}

impl Candidates {
    /// Number of sequences in this input.
    pub fn count(&self) -> usize {
        match self {
            Self::Frame(frame) => frame.width(),
            Self::List(elements) => elements.len(),
            Self::Single(_) => 1,
        }
    }
}

impl From<Frame> for Candidates {
    fn from(frame: Frame) -> Self {
        Self::Frame(frame)
    }
}

impl From<Vec<SequenceInput>> for Candidates {
    fn from(elements: Vec<SequenceInput>) -> Self {
        Self::List(elements)
    }
}

impl From<Vec<Series>> for Candidates {
    fn from(series: Vec<Series>) -> Self {
        Self::List(series.into_iter().map(SequenceInput::Labeled).collect())
    }
}

impl From<&[Series]> for Candidates {
    fn from(series: &[Series]) -> Self {
        Self::List(series.iter().cloned().map(SequenceInput::Labeled).collect())
    }
}

impl From<SequenceInput> for Candidates {
    fn from(element: SequenceInput) -> Self {
        Self::Single(element)
    }
}

impl From<Series> for Candidates {
    fn from(series: Series) -> Self {
        Self::Single(SequenceInput::Labeled(series))
    }
}
