//! Application state and the reducer that transitions it.
//!
//! `AppState` is an immutable value. Every user action becomes an [`Action`]
//! and [`reduce`] returns the next state; nothing mutates a state in place.
//! Persistence is not done here, see `Dashboard`.

use crate::settings::{Customization, find_preset, is_hex_color};
use crate::types::{ChartKind, Dataset};
use std::sync::Arc;

/// Everything the dashboard renders from
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Loaded data; shared read-only with statistics and chart mapping
    pub dataset: Arc<Dataset>,
    /// Bumped on every dataset replacement
    pub dataset_revision: u64,
    pub dark_theme: bool,
    pub customization: Customization,
    /// Data input panel visibility
    pub upload_open: bool,
    /// Customization panel visibility
    pub customization_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Dataset::empty(), false, Customization::default())
    }
}

impl AppState {
    /// Initial state; the data input panel starts open when there is no data
    pub fn new(dataset: Dataset, dark_theme: bool, customization: Customization) -> Self {
        let upload_open = dataset.is_empty();
        Self {
            dataset: Arc::new(dataset),
            dataset_revision: 0,
            dark_theme,
            customization,
            upload_open,
            customization_open: false,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.dataset.is_empty()
    }

    /// Theme name applied to the document root
    pub fn theme_name(&self) -> &'static str {
        if self.dark_theme { "dark" } else { "light" }
    }
}

/// State transitions
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Replace the dataset (upload, sample or manual commit) and close the input panel
    ReplaceDataset(Dataset),
    ClearDataset,
    SetChartKind(ChartKind),
    SetPrimaryColor(String),
    SetSecondaryColor(String),
    ApplyPreset(String),
    ToggleTheme,
    SetUploadOpen(bool),
    SetCustomizationOpen(bool),
}

/// Compute the next state. Invalid input (bad color, unknown preset) yields
/// an unchanged state.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::ReplaceDataset(dataset) => {
            next.dataset = Arc::new(dataset);
            next.dataset_revision += 1;
            next.upload_open = false;
        }
        Action::ClearDataset => {
            next.dataset = Arc::new(Dataset::empty());
            next.dataset_revision += 1;
        }
        Action::SetChartKind(kind) => {
            next.customization.chart_kind = kind;
        }
        Action::SetPrimaryColor(color) => {
            if is_hex_color(&color) {
                next.customization.primary_color = color;
            } else {
                tracing::warn!(color = %color, "Ignoring invalid primary color");
            }
        }
        Action::SetSecondaryColor(color) => {
            if is_hex_color(&color) {
                next.customization.secondary_color = color;
            } else {
                tracing::warn!(color = %color, "Ignoring invalid secondary color");
            }
        }
        Action::ApplyPreset(name) => match find_preset(&name) {
            Some(preset) => next.customization = next.customization.apply_preset(preset),
            None => tracing::warn!(preset = %name, "Unknown preset theme"),
        },
        Action::ToggleTheme => {
            next.dark_theme = !next.dark_theme;
        }
        Action::SetUploadOpen(open) => {
            next.upload_open = open;
        }
        Action::SetCustomizationOpen(open) => {
            next.customization_open = open;
        }
    }

    next
}
