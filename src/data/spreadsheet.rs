//! Spreadsheet parsing
//!
//! Decodes an uploaded workbook (xlsx, xls, xlsb or ods) into a [`Dataset`].
//! Only the first sheet is read. Its first row is the header and every later
//! row becomes one record keyed by header name.
//!
//! ## Memory Limits
//!
//! The whole sheet is materialized in memory. Nothing is refused by default;
//! a host that wants a guard passes [`ParseLimits`] to
//! [`parse_spreadsheet_bytes_with`].

use crate::constants::BLANK_HEADER;
use crate::data::error::{DataError, DataResult};
use crate::types::{DataCell, Dataset, Row};
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use std::collections::HashMap;
use std::io::Cursor;

/// A file handed over by the upload widget
#[derive(Clone, Debug)]
pub struct UploadedFile {
    /// File name as reported by the browser/OS
    pub name: String,
    /// Declared MIME type (may be empty)
    pub mime_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Whether the upload appears to be a spreadsheet by MIME type or extension.
    ///
    /// This is the upload widget's gate; the parser itself only fails on
    /// undecodable content.
    pub fn looks_like_spreadsheet(&self) -> bool {
        let mime = self.mime_type.to_lowercase();
        let name = self.name.to_lowercase();
        mime.contains("excel")
            || mime.contains("spreadsheet")
            || name.ends_with(".xlsx")
            || name.ends_with(".xls")
    }

    /// [`looks_like_spreadsheet`](Self::looks_like_spreadsheet) as a result
    pub fn ensure_spreadsheet(&self) -> DataResult<()> {
        if self.looks_like_spreadsheet() {
            Ok(())
        } else {
            Err(DataError::UnsupportedFile(self.name.clone()))
        }
    }
}

/// Optional caps on what a parse will materialize. `None` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseLimits {
    /// Largest accepted file, in bytes
    pub max_bytes: Option<usize>,
    /// Most data rows (header excluded) accepted from the sheet
    pub max_rows: Option<usize>,
}

impl ParseLimits {
    /// No limits
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }
}

/// Parse an uploaded spreadsheet into a Dataset, without size limits
pub fn parse_spreadsheet(file: &UploadedFile) -> DataResult<Dataset> {
    let dataset = parse_spreadsheet_bytes(&file.bytes)?;
    tracing::debug!(
        file = %file.name,
        rows = dataset.row_count(),
        "Parsed spreadsheet"
    );
    Ok(dataset)
}

/// Parse spreadsheet content from raw bytes
pub fn parse_spreadsheet_bytes(bytes: &[u8]) -> DataResult<Dataset> {
    parse_spreadsheet_bytes_with(bytes, &ParseLimits::unbounded())
}

/// Parse spreadsheet content, refusing input beyond `limits`
///
/// # Errors
/// - [`DataError::TooLarge`] when the file exceeds `max_bytes`
/// - [`DataError::TooManyRows`] when the sheet has more than `max_rows` data rows
pub fn parse_spreadsheet_bytes_with(bytes: &[u8], limits: &ParseLimits) -> DataResult<Dataset> {
    if let Some(max_bytes) = limits.max_bytes {
        if bytes.len() > max_bytes {
            return Err(DataError::TooLarge {
                size: bytes.len(),
                max: max_bytes,
            });
        }
    }

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    // First sheet by position in the workbook's sheet list
    let range = workbook.worksheet_range_at(0).ok_or(DataError::NoSheets)??;

    range_to_dataset(&range, limits.max_rows)
}

/// Convert a sheet range into rows. First row = headers.
fn range_to_dataset(range: &Range<Data>, max_rows: Option<usize>) -> DataResult<Dataset> {
    let mut row_iter = range.rows();

    let Some(header_row) = row_iter.next() else {
        return Ok(Dataset::empty());
    };
    let headers = unique_headers(header_row);

    let mut rows = Vec::new();
    for cells in row_iter {
        let row: Row = headers
            .iter()
            .zip(cells.iter())
            .filter_map(|(name, cell)| cell_to_value(cell).map(|value| (name.clone(), value)))
            .collect();

        // Skip completely empty rows
        if row.is_empty() {
            continue;
        }
        if let Some(max) = max_rows {
            if rows.len() >= max {
                return Err(DataError::TooManyRows {
                    rows: rows.len() + 1,
                    max_rows: max,
                });
            }
        }
        rows.push(row);
    }

    Ok(Dataset::new(rows))
}

/// Build column names from the header row.
///
/// Blank headers become `__EMPTY`, `__EMPTY_1`, ... and repeated names get a
/// numeric suffix so every key in a row is distinct.
fn unique_headers(header_row: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    header_row
        .iter()
        .map(|cell| {
            // Header text is kept verbatim, surrounding spaces included
            let base = match cell_to_value(cell) {
                Some(value) => value.to_display_string(),
                None => String::new(),
            };
            let base = if base.is_empty() {
                BLANK_HEADER.to_string()
            } else {
                base
            };

            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}_{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}

/// Convert a calamine cell into a row value. Empty cells are absent.
fn cell_to_value(cell: &Data) -> Option<DataCell> {
    let value = match cell {
        Data::Empty => return None,
        Data::Int(i) => DataCell::Number(*i as f64),
        Data::Float(f) => DataCell::Number(*f),
        // Dates keep their serial number, as sheet-to-JSON conversion does
        Data::DateTime(dt) => DataCell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => DataCell::Text(s.clone()),
        Data::String(s) => DataCell::Text(s.clone()),
        Data::Bool(b) => DataCell::Boolean(*b),
        Data::Error(e) => DataCell::Text(e.to_string()),
    };
    Some(value)
}
