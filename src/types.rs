//! Core types for the dashboard data pipeline.
//!
//! Rows are schema-on-read: each row is an ordered mapping from column name
//! to a tagged scalar. The column set of a dataset is whatever its rows carry,
//! and a key missing from one row simply reads as absent.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Cells
// ============================================================================

/// A single cell value.
///
/// Serialized as a bare JSON scalar so that stored datasets read as a plain
/// array of objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataCell {
    Number(f64),
    Boolean(bool),
    Text(String),
    Empty,
}

impl DataCell {
    pub fn text(value: impl Into<String>) -> Self {
        DataCell::Text(value.into())
    }

    /// The numeric value, if this cell holds one. Text is never coerced.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DataCell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, DataCell::Number(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DataCell::Empty)
    }

    /// Convert cell to its display string
    pub fn to_display_string(&self) -> String {
        match self {
            DataCell::Text(s) => s.clone(),
            DataCell::Number(n) => {
                // No trailing zeros for whole numbers
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            DataCell::Boolean(b) => if *b { "true" } else { "false" }.to_string(),
            DataCell::Empty => String::new(),
        }
    }
}

impl From<f64> for DataCell {
    fn from(value: f64) -> Self {
        DataCell::Number(value)
    }
}

impl From<i64> for DataCell {
    fn from(value: i64) -> Self {
        DataCell::Number(value as f64)
    }
}

impl From<bool> for DataCell {
    fn from(value: bool) -> Self {
        DataCell::Boolean(value)
    }
}

impl From<&str> for DataCell {
    fn from(value: &str) -> Self {
        DataCell::Text(value.to_string())
    }
}

impl From<String> for DataCell {
    fn from(value: String) -> Self {
        DataCell::Text(value)
    }
}

// ============================================================================
// Rows
// ============================================================================

/// An ordered row record: column name to cell, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, DataCell)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used heavily by sources and tests.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<DataCell>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value. Replacing keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DataCell>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&DataCell> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Numeric value for `key`; `None` when absent or not a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(DataCell::as_number)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataCell)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<DataCell>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = Row;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of column names to scalar values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Row, A::Error> {
                let mut row = Row::new();
                while let Some((key, value)) = access.next_entry::<String, DataCell>()? {
                    row.insert(key, value);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// An ordered sequence of rows conceptually sharing one schema.
///
/// An empty dataset is a valid state meaning "no data loaded".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn first_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Column names in the first row's key order.
    pub fn column_names(&self) -> Vec<&str> {
        self.first_row()
            .map(|row| row.keys().collect())
            .unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

// ============================================================================
// Column classification
// ============================================================================

/// Inferred kind of a column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    NonNumeric,
}

impl ColumnKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// Types of charts available
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Area,
    Pie,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
            ChartKind::Area => "Area",
            ChartKind::Pie => "Pie",
        }
    }

    pub fn all() -> &'static [ChartKind] {
        &[ChartKind::Line, ChartKind::Bar, ChartKind::Area, ChartKind::Pie]
    }

    /// Kind shown in the secondary panel next to a main chart of this kind
    pub fn alternative(&self) -> ChartKind {
        match self {
            ChartKind::Pie => ChartKind::Bar,
            _ => ChartKind::Pie,
        }
    }
}
