//! Error types for data operations
//!
//! Provides unified error handling for loading, generating and committing
//! datasets.

use thiserror::Error;

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// The byte stream is not a decodable spreadsheet container
    #[error("Spreadsheet parse error: {0}")]
    Parse(String),

    /// The workbook decoded but holds no sheets
    #[error("Workbook has no sheets")]
    NoSheets,

    /// The uploaded file does not look like a spreadsheet
    #[error("Not a spreadsheet file: {0}")]
    UnsupportedFile(String),

    /// File is larger than the caller's limit
    #[error("File too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    /// Sheet has more rows than the caller's limit
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// A manual entry was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Commit was requested with no pending entries
    #[error("No entries to commit")]
    EmptyInput,

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

impl From<calamine::Error> for DataError {
    fn from(e: calamine::Error) -> Self {
        DataError::Parse(e.to_string())
    }
}

/// Reasons a manual entry is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Category is required")]
    MissingCategory,

    #[error("Value must be numeric, got {0:?}")]
    NonNumericValue(String),
}
