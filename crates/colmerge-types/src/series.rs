//! Labeled one-dimensional container.
//!
//! A [`Series`] pairs an ordered list of unique [`Label`]s with one value per
//! label. Elementwise operators require both operands to carry identical
//! labels in identical order; callers align first with [`Series::reindex`]
//! and [`union_labels`].

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};
use crate::label::Label;
use crate::value::Value;

/// Ordered label→value container with unique labels.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    try_from = "RawSeries<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Series<T = Value> {
    name: Option<String>,
    labels: Vec<Label>,
    values: Vec<T>,
}

/// Wire form of a [`Series`], validated on the way in.
#[derive(Deserialize)]
struct RawSeries<T> {
    #[serde(default)]
    name: Option<String>,
    labels: Vec<Label>,
    values: Vec<T>,
}

impl<T> TryFrom<RawSeries<T>> for Series<T> {
    type Error = TypeError;

    fn try_from(raw: RawSeries<T>) -> TypeResult<Self> {
        let series = Self::new(raw.labels, raw.values)?;
        Ok(Self {
            name: raw.name,
            ..series
        })
    }
}

impl<T> Series<T> {
    /// Create a series from parallel label and value vectors.
    pub fn new(labels: Vec<Label>, values: Vec<T>) -> TypeResult<Self> {
        if labels.len() != values.len() {
            return Err(TypeError::LengthMismatch {
                expected: labels.len(),
                actual: values.len(),
            });
        }
        check_unique(&labels)?;
        Ok(Self {
            name: None,
            labels,
            values,
        })
    }

    /// Create an unlabeled series; labels are the positions `0..n`.
    pub fn from_values(values: Vec<T>) -> Self {
        Self {
            name: None,
            labels: Label::range(values.len()),
            values,
        }
    }

    /// Create a series from `(label, value)` pairs, keeping their order.
    pub fn from_pairs<L, I>(pairs: I) -> TypeResult<Self>
    where
        L: Into<Label>,
        I: IntoIterator<Item = (L, T)>,
    {
        let (labels, values): (Vec<Label>, Vec<T>) =
            pairs.into_iter().map(|(l, v)| (l.into(), v)).unzip();
        Self::new(labels, values)
    }

    /// Assemble from parts whose shape is already known to be valid.
    pub(crate) fn from_parts(name: Option<String>, labels: Vec<Label>, values: Vec<T>) -> Self {
        debug_assert_eq!(labels.len(), values.len());
        Self {
            name,
            labels,
            values,
        }
    }

    /// Attach a name to this series.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(label, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, &T)> {
        self.labels.iter().zip(self.values.iter())
    }

    /// Position of `label`, if present.
    pub fn position(&self, label: &Label) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Value stored under `label`, if present.
    pub fn get(&self, label: &Label) -> Option<&T> {
        self.position(label).map(|i| &self.values[i])
    }

    /// Returns `true` if both series carry the same labels in the same order.
    pub fn has_same_labels<U>(&self, other: &Series<U>) -> bool {
        self.labels == other.labels
    }

    /// Returns `true` if both series carry the same set of labels, in any order.
    pub fn has_same_label_set<U>(&self, other: &Series<U>) -> bool {
        self.labels.len() == other.labels.len() && {
            let ours: HashSet<&Label> = self.labels.iter().collect();
            other.labels.iter().all(|l| ours.contains(l))
        }
    }

    /// Apply `f` to every value, keeping labels and name.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Series<U> {
        Series {
            name: self.name.clone(),
            labels: self.labels.clone(),
            values: self.values.iter().map(f).collect(),
        }
    }

    /// Combine two identically-labeled series elementwise.
    pub fn zip_with<U, R>(
        &self,
        other: &Series<U>,
        f: impl Fn(&T, &U) -> R,
    ) -> TypeResult<Series<R>> {
        if !self.has_same_labels(other) {
            return Err(TypeError::LabelMismatch);
        }
        Ok(Series {
            name: None,
            labels: self.labels.clone(),
            values: self
                .values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }
}

impl<T: Clone> Series<T> {
    /// A series holding `value` under every label.
    pub fn filled(labels: Vec<Label>, value: T) -> Self {
        let values = vec![value; labels.len()];
        Self {
            name: None,
            labels,
            values,
        }
    }

    /// Conform this series to `labels`.
    ///
    /// Labels absent from `self` receive `fill`; labels of `self` absent from
    /// `labels` are dropped. `labels` is assumed unique.
    pub fn reindex(&self, labels: &[Label], fill: T) -> Series<T> {
        if self.labels == labels {
            return self.clone();
        }
        let lookup: HashMap<&Label, usize> =
            self.labels.iter().enumerate().map(|(i, l)| (l, i)).collect();
        let values = labels
            .iter()
            .map(|l| match lookup.get(l) {
                Some(&i) => self.values[i].clone(),
                None => fill.clone(),
            })
            .collect();
        Series {
            name: self.name.clone(),
            labels: labels.to_vec(),
            values,
        }
    }
}

impl Series<bool> {
    /// Elementwise conjunction.
    pub fn and(&self, other: &Series<bool>) -> TypeResult<Series<bool>> {
        self.zip_with(other, |a, b| *a && *b)
    }

    /// Elementwise disjunction.
    pub fn or(&self, other: &Series<bool>) -> TypeResult<Series<bool>> {
        self.zip_with(other, |a, b| *a || *b)
    }

    /// Elementwise negation.
    pub fn not(&self) -> Series<bool> {
        self.map(|b| !b)
    }

    /// `true` if every entry is `true` (vacuously `true` when empty).
    pub fn all(&self) -> bool {
        self.values.iter().all(|b| *b)
    }

    /// `true` if at least one entry is `true`.
    pub fn any(&self) -> bool {
        self.values.iter().any(|b| *b)
    }

    pub fn count_true(&self) -> usize {
        self.values.iter().filter(|b| **b).count()
    }

    /// Labels whose entry is `true`, in order.
    pub fn true_labels(&self) -> Vec<Label> {
        self.iter()
            .filter(|(_, b)| **b)
            .map(|(l, _)| l.clone())
            .collect()
    }

    /// Labels whose entry is `false`, in order.
    pub fn false_labels(&self) -> Vec<Label> {
        self.iter()
            .filter(|(_, b)| !**b)
            .map(|(l, _)| l.clone())
            .collect()
    }
}

impl Series<Value> {
    /// `true` wherever the value is missing.
    pub fn is_null_mask(&self) -> Series<bool> {
        self.map(Value::is_null)
    }

    pub fn any_null(&self) -> bool {
        self.values.iter().any(Value::is_null)
    }

    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// Elementwise strict equality; missing values never compare equal.
    pub fn strict_eq(&self, other: &Series<Value>) -> TypeResult<Series<bool>> {
        self.zip_with(other, Value::strict_eq)
    }

    /// Conform to `labels`, filling absent labels with `Value::Null`.
    pub fn reindex_null(&self, labels: &[Label]) -> Series<Value> {
        self.reindex(labels, Value::Null)
    }

    /// Return a copy in which positions where `mask` is `true` take the
    /// value from `other`. `self` is left untouched.
    pub fn fill_where(
        &self,
        mask: &Series<bool>,
        other: &Series<Value>,
    ) -> TypeResult<Series<Value>> {
        if !self.has_same_labels(mask) || !self.has_same_labels(other) {
            return Err(TypeError::LabelMismatch);
        }
        let values = self
            .values
            .iter()
            .zip(mask.values.iter())
            .zip(other.values.iter())
            .map(|((ours, take), theirs)| if *take { theirs.clone() } else { ours.clone() })
            .collect();
        Ok(Series {
            name: self.name.clone(),
            labels: self.labels.clone(),
            values,
        })
    }
}

/// Equality ignores the name, like comparing two columns by content.
impl<T: PartialEq> PartialEq for Series<T> {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels && self.values == other.values
    }
}

/// Union of the labels of every series, in first-seen order.
pub fn union_labels<'a, T: 'a>(series: impl IntoIterator<Item = &'a Series<T>>) -> Vec<Label> {
    let mut seen = HashSet::new();
    let mut labels = Vec::new();
    for s in series {
        for label in &s.labels {
            if seen.insert(label) {
                labels.push(label.clone());
            }
        }
    }
    labels
}

pub(crate) fn check_unique(labels: &[Label]) -> TypeResult<()> {
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label) {
            return Err(TypeError::DuplicateLabel(label.clone()));
        }
    }
    Ok(())
}
