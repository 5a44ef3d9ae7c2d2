//! Analytics dashboard core
//!
//! Tabular data in, chart-ready descriptions out:
//!
//! - `data` - spreadsheet parsing, sample data, manual entry, statistics, chart series
//! - `app` - immutable application state and its reducer
//! - `dashboard` - controller wiring state, persistence, uploads and toasts
//! - `view` - stat cards, chart panels and raw-data preview
//! - `export` - PNG and landscape PDF export
//!
//! Rendering is left to the host UI.

pub mod app;
pub mod constants;
pub mod dashboard;
pub mod data;
pub mod data_table;
pub mod export;
pub mod logging;
pub mod notifications;
pub mod preferences;
pub mod settings;
pub mod types;
pub mod view;

pub use dashboard::Dashboard;
