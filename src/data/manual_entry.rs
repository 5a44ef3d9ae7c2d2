//! Manual data entry
//!
//! Accumulates category/value/series entries typed in by the user and turns
//! them into a dataset on commit.

use crate::constants::SERIES_OPTIONS;
use crate::data::error::{DataError, DataResult, ValidationError};
use crate::types::{Dataset, Row};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// One user-entered data point
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManualEntry {
    pub category: String,
    pub value: f64,
    pub series: String,
    pub id: u64,
}

impl ManualEntry {
    /// Row layout: category, value, series, id
    pub fn to_row(&self) -> Row {
        Row::new()
            .with("category", self.category.as_str())
            .with("value", self.value)
            .with("series", self.series.as_str())
            .with("id", self.id as f64)
    }
}

/// Stateful builder for manually entered rows
#[derive(Clone, Debug, Default)]
pub struct ManualEntryAccumulator {
    entries: Vec<ManualEntry>,
    last_id: u64,
}

impl ManualEntryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append an entry, returning the accumulated list.
    ///
    /// Rejected input leaves the accumulator untouched.
    pub fn add_entry(
        &mut self,
        category: &str,
        value: &str,
        series: &str,
    ) -> Result<&[ManualEntry], ValidationError> {
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }

        let value = parse_value(value)?;

        let series = match series.trim() {
            "" => SERIES_OPTIONS[0].to_string(),
            s => s.to_string(),
        };

        let id = self.next_id();
        self.entries.push(ManualEntry {
            category: category.to_string(),
            value,
            series,
            id,
        });

        Ok(&self.entries)
    }

    /// Turn the pending entries into a dataset and clear them.
    pub fn commit(&mut self) -> DataResult<Dataset> {
        if self.entries.is_empty() {
            return Err(DataError::EmptyInput);
        }

        let rows = self.entries.drain(..).map(|e| e.to_row()).collect::<Vec<_>>();
        Ok(Dataset::new(rows))
    }

    pub fn entries(&self) -> &[ManualEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Millisecond timestamp, bumped when needed so ids strictly increase.
    fn next_id(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}

fn parse_value(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::NonNumericValue(raw.to_string()))
}
