//! Raw data preview table.
//!
//! Features:
//! - Upper-cased column headers taken from the first row
//! - Leading rows only, capped at [`PREVIEW_ROW_LIMIT`]
//! - Locale-style number formatting with thousands separators
//!
//! ## Usage
//!
//! ```rust,ignore
//! let table = PreviewTable::build(&dataset);
//! for row in &table.rows { /* render */ }
//! ```

use crate::constants::PREVIEW_ROW_LIMIT;
use crate::types::{DataCell, Dataset};
use serde::Serialize;

/// Display-ready slice of a dataset
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PreviewTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
    /// e.g. "1.2K rows"
    pub row_count_label: String,
    /// Shown under the table when not every row is visible
    pub footer: Option<String>,
}

impl PreviewTable {
    /// Build the preview of the first [`PREVIEW_ROW_LIMIT`] rows
    pub fn build(dataset: &Dataset) -> Self {
        Self::build_with_limit(dataset, PREVIEW_ROW_LIMIT)
    }

    /// Build a preview of at most `limit` leading rows. Columns follow the
    /// first row's keys; cells a row lacks render blank.
    pub fn build_with_limit(dataset: &Dataset, limit: usize) -> Self {
        let columns = dataset.column_names();
        let headers = columns.iter().map(|c| c.to_uppercase()).collect();

        let shown = limit.min(dataset.row_count());
        let rows: Vec<Vec<String>> = dataset.rows()[..shown]
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| row.get(c).map(format_cell).unwrap_or_default())
                    .collect()
            })
            .collect();

        let footer = (shown < dataset.row_count()).then(|| {
            format!("Showing first {} of {} rows", shown, dataset.row_count())
        });

        Self {
            headers,
            rows,
            total_rows: dataset.row_count(),
            row_count_label: format_row_count(dataset.row_count()),
            footer,
        }
    }
}

fn format_cell(cell: &DataCell) -> String {
    match cell {
        DataCell::Number(n) => format_number(*n),
        other => other.to_display_string(),
    }
}

/// Format a number with thousands separators and at most three decimals
/// (e.g., 1234567.891 → "1,234,567.891").
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let formatted = format!("{:.3}", abs);
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format row count with thousands separator (e.g., "1,234 rows")
pub fn format_row_count(count: usize) -> String {
    let formatted = if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    };

    if count == 1 {
        format!("{} row", formatted)
    } else {
        format!("{} rows", formatted)
    }
}
