//! Data ingestion and processing pipeline
//!
//! Three sources produce a [`Dataset`](crate::types::Dataset):
//! - `spreadsheet`: first sheet of an uploaded workbook
//! - `sample`: synthetic monthly demo data
//! - `manual_entry`: rows typed in one at a time
//!
//! Two derivations read it:
//! - `statistics`: column classification and per-column total/average/min/max
//! - `chart_engine`: chart-ready series for line, bar, area and pie charts
//!
//! ## Error Handling
//!
//! All data operations return `DataResult<T>` which uses the `DataError` type.
//! Common errors include:
//! - `Parse`: the upload is not a decodable spreadsheet
//! - `Validation`: a manual entry is missing its category or value
//! - `EmptyInput`: commit with no manual entries

mod chart_engine;
mod error;
mod manual_entry;
mod sample;
mod spreadsheet;
mod statistics;

pub use chart_engine::*;
pub use error::*;
pub use manual_entry::*;
pub use sample::*;
pub use spreadsheet::*;
pub use statistics::*;
