//! Application-wide constants.
//!
//! Centralizes limits, defaults and storage keys so the pipeline, view and
//! persistence layers agree on them.

// ============================================================================
// Data Loading
// ============================================================================

/// Column name treated as a row identity rather than a measure
pub const ID_COLUMN: &str = "id";

/// Header name given to blank header cells
pub const BLANK_HEADER: &str = "__EMPTY";

// ============================================================================
// Customization Defaults
// ============================================================================

/// Default primary chart color
pub const DEFAULT_PRIMARY_COLOR: &str = "#3f51b5";

/// Default secondary chart color
pub const DEFAULT_SECONDARY_COLOR: &str = "#f50057";

/// Colors appended after primary/secondary to build the chart palette
pub const EXTRA_PALETTE_COLORS: [&str; 3] = ["#4caf50", "#ff9800", "#9c27b0"];

/// Fallback series color when a palette is empty
pub const DEFAULT_SERIES_COLOR: &str = "#8884d8";

// ============================================================================
// Dashboard Layout
// ============================================================================

/// Number of summary stat cards shown above the charts
pub const MAX_STAT_CARDS: usize = 4;

/// Number of rows shown in the raw data preview
pub const PREVIEW_ROW_LIMIT: usize = 10;

/// Stroke width for line and area series
pub const SERIES_STROKE_WIDTH: f32 = 2.0;

/// Fill opacity for area series
pub const AREA_FILL_OPACITY: f32 = 0.6;

// ============================================================================
// Manual Entry
// ============================================================================

/// Series labels offered for manual entries; the first is the default
pub const SERIES_OPTIONS: [&str; 3] = ["series1", "series2", "series3"];

// ============================================================================
// Persistence
// ============================================================================

/// Preference key holding the current dataset
pub const DATASET_KEY: &str = "dashboardData";

/// Preference key holding the dark theme flag
pub const THEME_KEY: &str = "darkTheme";

/// Preference key holding the chart customization
pub const CUSTOMIZATION_KEY: &str = "dashboardCustomization";

/// File name of the JSON preference store inside the config directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "analytics-dashboard";

// ============================================================================
// Export
// ============================================================================

/// File name suggested for PNG exports
pub const PNG_EXPORT_NAME: &str = "dashboard.png";

/// File name suggested for PDF exports
pub const PDF_EXPORT_NAME: &str = "dashboard.pdf";

/// A4 landscape page width in PDF points
pub const A4_LANDSCAPE_WIDTH_PT: f32 = 841.89;

/// A4 landscape page height in PDF points
pub const A4_LANDSCAPE_HEIGHT_PT: f32 = 595.28;
