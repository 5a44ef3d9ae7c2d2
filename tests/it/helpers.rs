//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDatasetBuilder` - Builder for small in-memory datasets
//! - `xlsx_bytes()` / `xlsx_file()` - Real workbooks built with rust_xlsxwriter
//! - Snapshot sources for export tests
//! - Toast assertions

#![allow(dead_code)]

use analytics_dashboard::data::UploadedFile;
use analytics_dashboard::export::{ExportError, ExportResult, SnapshotSource};
use analytics_dashboard::notifications::{ToastManager, ToastVariant};
use analytics_dashboard::types::{DataCell, Dataset, Row};
use image::{Rgba, RgbaImage};
use rust_xlsxwriter::Workbook;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

// ============================================================================
// TestDatasetBuilder
// ============================================================================

/// Builder for datasets whose rows share one column list.
///
/// # Example
/// ```ignore
/// let ds = TestDatasetBuilder::new(&["month", "sales"])
///     .row(vec!["Jan".into(), 500.0.into()])
///     .build();
/// ```
pub struct TestDatasetBuilder {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl TestDatasetBuilder {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row; `DataCell::Empty` leaves the column out of the row.
    pub fn row(mut self, cells: Vec<DataCell>) -> Self {
        let row = self
            .columns
            .iter()
            .zip(cells)
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(name, cell)| (name.clone(), cell))
            .collect();
        self.rows.push(row);
        self
    }

    pub fn build(self) -> Dataset {
        Dataset::new(self.rows)
    }
}

/// `{month, sales}` rows, one per (month, sales) pair
pub fn monthly_sales(values: &[(&str, f64)]) -> Dataset {
    Dataset::new(
        values
            .iter()
            .map(|(month, sales)| Row::new().with("month", *month).with("sales", *sales))
            .collect(),
    )
}

// ============================================================================
// Spreadsheet fixtures
// ============================================================================

/// Cell written into a fixture workbook
#[derive(Clone, Debug)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Blank,
}

/// Build an xlsx workbook in memory. Each entry is (sheet name, rows).
pub fn xlsx_bytes(sheets: &[(&str, Vec<Vec<Cell>>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, cells) in rows.iter().enumerate() {
            for (c, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Text(s) => {
                        worksheet.write_string(r as u32, c as u16, *s).unwrap();
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(r as u32, c as u16, *n).unwrap();
                    }
                    Cell::Blank => {}
                }
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// Single-sheet `month`/`sales` workbook wrapped as an upload
pub fn xlsx_file(name: &str, rows: &[(&'static str, f64)]) -> UploadedFile {
    let mut sheet = vec![vec![Cell::Text("month"), Cell::Text("sales")]];
    sheet.extend(
        rows.iter()
            .map(|(month, sales)| vec![Cell::Text(*month), Cell::Number(*sales)]),
    );
    UploadedFile::new(name, XLSX_MIME, xlsx_bytes(&[("Sheet1", sheet)]))
}

/// An upload that claims to be a spreadsheet but is not decodable
pub fn corrupt_xlsx_file() -> UploadedFile {
    UploadedFile::new("broken.xlsx", XLSX_MIME, b"this is not a zip archive".to_vec())
}

// ============================================================================
// Snapshot sources
// ============================================================================

/// Solid-color image standing in for a rendered dashboard
pub fn solid_snapshot(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([245, 245, 245, 255]))
}

/// A view that cannot be captured
pub struct DetachedView;

impl SnapshotSource for DetachedView {
    fn snapshot(&self) -> ExportResult<RgbaImage> {
        Err(ExportError::Snapshot("view is not attached".to_string()))
    }
}

// ============================================================================
// Toast assertions
// ============================================================================

/// Assert the newest toast has `variant` and `message`
pub fn assert_latest_toast(toasts: &ToastManager, variant: ToastVariant, message: &str) {
    let toast = toasts.latest().expect("expected a toast");
    assert_eq!(toast.variant, variant, "unexpected toast: {:?}", toast.message);
    assert_eq!(toast.message, message);
}
