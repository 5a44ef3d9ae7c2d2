//! Column classification and summary statistics
//!
//! The first row defines the schema: a column is numeric iff its value in the
//! first row is a number. Later rows are not re-checked, so a column whose
//! first value is text stays non-numeric even when every other value is a
//! number (and the reverse). Values in later rows that are missing or not
//! numbers are skipped by every reduction here.

use crate::constants::ID_COLUMN;
use crate::types::{ColumnKind, Dataset};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Column name to inferred kind, in first-row key order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnKinds {
    entries: Vec<(String, ColumnKind)>,
}

impl ColumnKinds {
    pub fn get(&self, column: &str) -> Option<ColumnKind> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, kind)| *kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnKind)> {
        self.entries.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Names of numeric columns, in order
    pub fn numeric(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, kind)| kind.is_numeric())
            .map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ColumnKinds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, kind) in &self.entries {
            map.serialize_entry(name, kind)?;
        }
        map.end()
    }
}

/// Summary of one numeric column
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColumnStatistics {
    pub total: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    /// Number of rows that contributed a value
    pub count: usize,
}

/// Numeric column name to statistics, in first-row key order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatisticsMap {
    entries: Vec<(String, ColumnStatistics)>,
}

impl StatisticsMap {
    pub fn get(&self, column: &str) -> Option<&ColumnStatistics> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnStatistics)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for StatisticsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, stats) in &self.entries {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}

/// Classify every column of the first row as numeric or non-numeric.
///
/// Empty dataset → empty mapping.
pub fn classify_columns(dataset: &Dataset) -> ColumnKinds {
    let entries = dataset
        .first_row()
        .map(|row| {
            row.iter()
                .map(|(name, cell)| {
                    let kind = if cell.is_number() {
                        ColumnKind::Numeric
                    } else {
                        ColumnKind::NonNumeric
                    };
                    (name.to_string(), kind)
                })
                .collect()
        })
        .unwrap_or_default();

    ColumnKinds { entries }
}

/// Names of the numeric columns
pub fn numeric_fields(dataset: &Dataset) -> Vec<String> {
    classify_columns(dataset)
        .numeric()
        .map(str::to_string)
        .collect()
}

/// Numeric columns that are measures, i.e. excluding the `id` column.
///
/// These drive chart series, pie slices and stat cards.
pub fn plottable_fields(dataset: &Dataset) -> Vec<String> {
    classify_columns(dataset)
        .numeric()
        .filter(|name| *name != ID_COLUMN)
        .map(str::to_string)
        .collect()
}

/// Compute total/average/min/max for every numeric column.
///
/// Always a full recompute over the dataset; empty dataset → empty mapping.
pub fn compute_statistics(dataset: &Dataset) -> StatisticsMap {
    let kinds = classify_columns(dataset);

    let entries = kinds
        .numeric()
        .filter_map(|column| column_statistics(dataset, column).map(|s| (column.to_string(), s)))
        .collect();

    StatisticsMap { entries }
}

/// Statistics for a single column, or `None` when no row holds a number for it
pub fn column_statistics(dataset: &Dataset, column: &str) -> Option<ColumnStatistics> {
    let mut total = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut count = 0usize;
    let mut skipped = 0usize;

    for row in dataset.rows() {
        match row.get(column) {
            Some(cell) => match cell.as_number() {
                Some(value) => {
                    total += value;
                    min = min.min(value);
                    max = max.max(value);
                    count += 1;
                }
                None if !cell.is_empty() => skipped += 1,
                None => {}
            },
            None => {}
        }
    }

    if skipped > 0 {
        tracing::debug!(column, skipped, "Skipped non-numeric values in numeric column");
    }

    if count == 0 {
        return None;
    }

    Some(ColumnStatistics {
        total,
        average: total / count as f64,
        min,
        max,
        count,
    })
}
