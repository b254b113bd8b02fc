//! Tabular container: rows share one label index, columns are named.

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};
use crate::label::Label;
use crate::series::{check_unique, union_labels, Series};
use crate::value::Value;

/// A set of equally-indexed named columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFrame")]
pub struct Frame {
    index: Vec<Label>,
    columns: Vec<(String, Vec<Value>)>,
}

/// Wire form of a [`Frame`], validated on the way in.
#[derive(Deserialize)]
struct RawFrame {
    index: Vec<Label>,
    #[serde(default)]
    columns: Vec<(String, Vec<Value>)>,
}

impl TryFrom<RawFrame> for Frame {
    type Error = TypeError;

    fn try_from(raw: RawFrame) -> TypeResult<Self> {
        check_unique(&raw.index)?;
        let mut frame = Self::new(raw.index);
        for (name, values) in raw.columns {
            frame.push_column(name, values)?;
        }
        Ok(frame)
    }
}

impl Frame {
    /// An empty frame (no columns) over the given row labels.
    pub fn new(index: Vec<Label>) -> Self {
        Self {
            index,
            columns: Vec::new(),
        }
    }

    /// Build a frame with positional row labels from named columns.
    ///
    /// All columns must have the same height.
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<Value>)>) -> TypeResult<Self> {
        let height = columns.first().map_or(0, |(_, v)| v.len());
        let mut frame = Self::new(Label::range(height));
        for (name, values) in columns {
            frame.push_column(name, values)?;
        }
        Ok(frame)
    }

    /// Concatenate series side by side.
    ///
    /// Rows are aligned on the union of all labels (first-seen order); a
    /// series lacking a label contributes a null there. Unnamed series are
    /// named after their position.
    pub fn from_series(series: &[Series]) -> Self {
        let index = union_labels(series);
        let columns = series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let name = s.name().map_or_else(|| i.to_string(), str::to_string);
                (name, s.reindex_null(&index).into_values())
            })
            .collect();
        Self { index, columns }
    }

    /// Append a column; its height must match the index.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<Value>) -> TypeResult<()> {
        if values.len() != self.index.len() {
            return Err(TypeError::LengthMismatch {
                expected: self.index.len(),
                actual: values.len(),
            });
        }
        self.columns.push((name.into(), values));
        Ok(())
    }

    pub fn index(&self) -> &[Label] {
        &self.index
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.index.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// The named column as a series over the frame's index.
    pub fn column(&self, name: &str) -> Option<Series> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(n, v)| self.make_series(n, v.clone()))
    }

    /// Split into one named series per column, in column order.
    pub fn into_series(self) -> Vec<Series> {
        let Frame { index, columns } = self;
        columns
            .into_iter()
            .map(|(name, values)| Series::from_parts(Some(name), index.clone(), values))
            .collect()
    }

    fn make_series(&self, name: &str, values: Vec<Value>) -> Series {
        Series::from_parts(Some(name.to_string()), self.index.clone(), values)
    }
}
