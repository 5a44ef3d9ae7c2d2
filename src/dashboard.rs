//! Dashboard controller
//!
//! Owns the [`AppState`] and routes every user action through the reducer.
//! Side effects live here and nowhere else:
//!
//! - persisting the dataset, theme and customization when they change
//! - running spreadsheet parses on a background thread
//! - turning failures into toasts
//!
//! Nothing in this module returns an error to the caller. A failed upload,
//! rejected entry or broken export leaves the state as it was and shows a
//! toast.

use crate::app::{Action, AppState, UploadTicket, UploadTracker, reduce};
use crate::constants::{CUSTOMIZATION_KEY, DATASET_KEY, THEME_KEY};
use crate::data::{
    DataError, DataResult, ManualEntry, ManualEntryAccumulator, StatisticsMap, UploadedFile,
    compute_statistics, generate_sample_data, parse_spreadsheet,
};
use crate::export::{ExportResult, ExportedFile, SnapshotSource, export_pdf, export_png};
use crate::notifications::{Toast, ToastManager};
use crate::preferences::{
    JsonFileStore, MemoryStore, PreferenceStore, default_preferences_path, load_or_default, save,
};
use crate::settings::{Customization, find_preset, is_hex_color};
use crate::types::{ChartKind, Dataset};
use crate::view::DashboardView;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

type UploadOutcome = (UploadTicket, DataResult<Dataset>);

pub struct Dashboard {
    state: AppState,
    store: Box<dyn PreferenceStore>,
    toasts: ToastManager,
    manual: ManualEntryAccumulator,
    uploads: UploadTracker,
    upload_tx: Sender<UploadOutcome>,
    upload_rx: Receiver<UploadOutcome>,
}

impl Dashboard {
    /// Restore the previous session from `store`
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        let dataset: Dataset = load_or_default(store.as_ref(), DATASET_KEY);
        let dark_theme: bool = load_or_default(store.as_ref(), THEME_KEY);
        let customization: Customization = load_or_default(store.as_ref(), CUSTOMIZATION_KEY);

        tracing::info!(
            rows = dataset.row_count(),
            dark_theme,
            chart = customization.chart_kind.label(),
            "Dashboard restored"
        );

        let (upload_tx, upload_rx) = mpsc::channel();
        Self {
            state: AppState::new(dataset, dark_theme, customization),
            store,
            toasts: ToastManager::new(),
            manual: ManualEntryAccumulator::new(),
            uploads: UploadTracker::new(),
            upload_tx,
            upload_rx,
        }
    }

    /// Dashboard backed by the preferences file in the user's config dir,
    /// or by memory when that file can't be used.
    pub fn open_default() -> Self {
        let store: Box<dyn PreferenceStore> = match default_preferences_path() {
            Some(path) => match JsonFileStore::open(&path) {
                Ok(store) => Box::new(store),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to open preferences, using memory");
                    Box::new(MemoryStore::new())
                }
            },
            None => {
                tracing::warn!("No config directory, preferences will not persist");
                Box::new(MemoryStore::new())
            }
        };
        Self::new(store)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.state.dataset
    }

    pub fn customization(&self) -> &Customization {
        &self.state.customization
    }

    pub fn view(&self) -> DashboardView {
        DashboardView::build(&self.state.dataset, &self.state.customization)
    }

    pub fn statistics(&self) -> StatisticsMap {
        compute_statistics(&self.state.dataset)
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastManager {
        &mut self.toasts
    }

    // ========================================================================
    // State transitions
    // ========================================================================

    /// Apply an action and persist whatever it changed
    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(&self.state, action);
        self.persist_changes(&next);
        self.state = next;
    }

    fn persist_changes(&self, next: &AppState) {
        let store = self.store.as_ref();
        let results = [
            (next.dataset_revision != self.state.dataset_revision)
                .then(|| (DATASET_KEY, save(store, DATASET_KEY, next.dataset.as_ref()))),
            (next.dark_theme != self.state.dark_theme)
                .then(|| (THEME_KEY, save(store, THEME_KEY, &next.dark_theme))),
            (next.customization != self.state.customization)
                .then(|| (CUSTOMIZATION_KEY, save(store, CUSTOMIZATION_KEY, &next.customization))),
        ];

        for (key, result) in results.into_iter().flatten() {
            if let Err(e) = result {
                tracing::warn!(key, error = %e, "Failed to persist preference");
            }
        }
    }

    /// Replace the dataset from a source other than an in-flight upload.
    /// Pending uploads become stale.
    fn replace_dataset(&mut self, dataset: Dataset, source: &str) {
        self.uploads.invalidate();
        tracing::info!(source, rows = dataset.row_count(), "Dataset replaced");
        self.dispatch(Action::ReplaceDataset(dataset));
    }

    // ========================================================================
    // Data input
    // ========================================================================

    pub fn load_sample(&mut self) {
        self.replace_dataset(generate_sample_data(), "sample");
        self.toasts.push(Toast::success("Sample data loaded successfully!"));
    }

    /// Start parsing `file` on a background thread.
    ///
    /// Returns `None` when the file is rejected up front. The result is
    /// applied by [`poll_uploads`](Self::poll_uploads) or
    /// [`wait_for_upload`](Self::wait_for_upload), and only if no newer
    /// dataset arrived in the meantime.
    pub fn begin_upload(&mut self, file: UploadedFile) -> Option<UploadTicket> {
        if !self.accept_file(&file) {
            return None;
        }

        let ticket = self.uploads.issue();
        let tx = self.upload_tx.clone();
        let name = file.name.clone();

        let spawned = std::thread::Builder::new()
            .name("spreadsheet-parse".to_string())
            .spawn(move || {
                let result = parse_spreadsheet(&file);
                // Receiver gone means the dashboard was dropped
                let _ = tx.send((ticket, result));
            });

        match spawned {
            Ok(_) => tracing::debug!(file = %name, generation = ticket.generation(), "Upload started"),
            Err(e) => {
                self.complete_upload(ticket, Err(DataError::Io(e)));
            }
        }
        Some(ticket)
    }

    /// Parse `file` on the calling thread and apply the result
    pub fn upload(&mut self, file: UploadedFile) -> bool {
        if !self.accept_file(&file) {
            return false;
        }
        let ticket = self.uploads.issue();
        let result = parse_spreadsheet(&file);
        self.complete_upload(ticket, result)
    }

    /// Apply every finished background parse. Returns how many replaced the
    /// dataset.
    pub fn poll_uploads(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((ticket, result)) = self.upload_rx.try_recv() {
            if self.complete_upload(ticket, result) {
                applied += 1;
            }
        }
        applied
    }

    /// Block until one background parse finishes (or `timeout` passes) and
    /// apply it. Returns whether it replaced the dataset.
    pub fn wait_for_upload(&mut self, timeout: Duration) -> bool {
        match self.upload_rx.recv_timeout(timeout) {
            Ok((ticket, result)) => self.complete_upload(ticket, result),
            Err(_) => false,
        }
    }

    /// Number of parses started but not yet applied or discarded
    pub fn uploads_in_flight(&self) -> usize {
        self.uploads.in_flight()
    }

    /// Apply a parse result if `ticket` is still the newest upload
    pub fn complete_upload(&mut self, ticket: UploadTicket, result: DataResult<Dataset>) -> bool {
        if !self.uploads.finish(ticket) {
            tracing::warn!(
                generation = ticket.generation(),
                ok = result.is_ok(),
                "Discarding stale upload result"
            );
            return false;
        }

        match result {
            Ok(dataset) => {
                tracing::info!(source = "upload", rows = dataset.row_count(), "Dataset replaced");
                self.dispatch(Action::ReplaceDataset(dataset));
                self.toasts.push(Toast::success("Excel file processed successfully!"));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error processing file");
                self.toasts.push(Toast::error("Error processing file"));
                false
            }
        }
    }

    fn accept_file(&mut self, file: &UploadedFile) -> bool {
        match file.ensure_spreadsheet() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(mime = %file.mime_type, error = %e, "Rejected upload");
                self.toasts.push(Toast::error("Please upload a valid Excel file"));
                false
            }
        }
    }

    /// Validate and stage one manual entry. Rejected entries show a warning.
    pub fn add_manual_entry(&mut self, category: &str, value: &str, series: &str) -> bool {
        match self.manual.add_entry(category, value, series) {
            Ok(entries) => {
                tracing::debug!(pending = entries.len(), "Manual entry added");
                true
            }
            Err(e) => {
                let err = DataError::from(e);
                tracing::debug!(error = %err, "Manual entry rejected");
                self.toasts.push(Toast::warning(err.to_string()));
                false
            }
        }
    }

    pub fn manual_entries(&self) -> &[ManualEntry] {
        self.manual.entries()
    }

    /// Replace the dataset with the staged manual entries
    pub fn commit_manual_entries(&mut self) -> bool {
        match self.manual.commit() {
            Ok(dataset) => {
                self.replace_dataset(dataset, "manual");
                self.toasts.push(Toast::success("Manual data loaded successfully!"));
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Nothing to commit");
                self.toasts.push(Toast::error("Please add some data entries first"));
                false
            }
        }
    }

    pub fn clear_data(&mut self) {
        self.uploads.invalidate();
        self.dispatch(Action::ClearDataset);
        self.toasts.push(Toast::info("Data cleared"));
    }

    // ========================================================================
    // Customization and panels
    // ========================================================================

    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        self.dispatch(Action::SetChartKind(kind));
    }

    pub fn set_primary_color(&mut self, color: &str) -> bool {
        if !self.check_color(color) {
            return false;
        }
        self.dispatch(Action::SetPrimaryColor(color.to_string()));
        true
    }

    pub fn set_secondary_color(&mut self, color: &str) -> bool {
        if !self.check_color(color) {
            return false;
        }
        self.dispatch(Action::SetSecondaryColor(color.to_string()));
        true
    }

    fn check_color(&mut self, color: &str) -> bool {
        if is_hex_color(color) {
            return true;
        }
        self.toasts.push(Toast::error(format!("Invalid color: {}", color)));
        false
    }

    pub fn apply_preset(&mut self, name: &str) -> bool {
        if find_preset(name).is_none() {
            self.toasts.push(Toast::error(format!("Unknown theme: {}", name)));
            return false;
        }
        self.dispatch(Action::ApplyPreset(name.to_string()));
        true
    }

    pub fn toggle_theme(&mut self) {
        self.dispatch(Action::ToggleTheme);
    }

    pub fn set_upload_open(&mut self, open: bool) {
        self.dispatch(Action::SetUploadOpen(open));
    }

    pub fn set_customization_open(&mut self, open: bool) {
        self.dispatch(Action::SetCustomizationOpen(open));
    }

    // ========================================================================
    // Export
    // ========================================================================

    pub fn export_png(&mut self, source: &dyn SnapshotSource) -> Option<ExportedFile> {
        let result = export_png(source).map(ExportedFile::png);
        self.finish_export(result, "PNG")
    }

    pub fn export_pdf(&mut self, source: &dyn SnapshotSource) -> Option<ExportedFile> {
        let result = export_pdf(source).map(ExportedFile::pdf);
        self.finish_export(result, "PDF")
    }

    fn finish_export(&mut self, result: ExportResult<ExportedFile>, format: &str) -> Option<ExportedFile> {
        match result {
            Ok(file) => {
                tracing::info!(file = file.file_name, size = file.bytes.len(), "Dashboard exported");
                Some(file)
            }
            Err(e) => {
                tracing::warn!(export = format, error = %e, "Export failed");
                self.toasts
                    .push(Toast::error(format!("Error exporting {}. Please try again.", format)));
                None
            }
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }
}
