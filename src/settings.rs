//! Chart customization: chart kind, colors and preset color themes.

use crate::constants::{DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, EXTRA_PALETTE_COLORS};
use crate::types::ChartKind;
use serde::{Deserialize, Serialize};

/// User-selected chart settings. Independent of the loaded dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    #[serde(rename = "chartType")]
    pub chart_kind: ChartKind,
    pub primary_color: String,
    pub secondary_color: String,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            chart_kind: ChartKind::Line,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
        }
    }
}

impl Customization {
    pub fn with_chart_kind(mut self, chart_kind: ChartKind) -> Self {
        self.chart_kind = chart_kind;
        self
    }

    pub fn with_colors(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_color = primary.into();
        self.secondary_color = secondary.into();
        self
    }

    /// Replace both colors with a preset's, keeping the chart kind
    pub fn apply_preset(self, preset: &PresetTheme) -> Self {
        self.with_colors(preset.primary, preset.secondary)
    }

    /// Series palette: primary, secondary, then fixed accent colors
    pub fn palette(&self) -> Vec<String> {
        let mut palette = vec![self.primary_color.clone(), self.secondary_color.clone()];
        palette.extend(EXTRA_PALETTE_COLORS.iter().map(|c| c.to_string()));
        palette
    }
}

/// A named primary/secondary color pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetTheme {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

pub const PRESET_THEMES: [PresetTheme; 5] = [
    PresetTheme { name: "Default", primary: "#3f51b5", secondary: "#f50057" },
    PresetTheme { name: "Ocean", primary: "#2196f3", secondary: "#00bcd4" },
    PresetTheme { name: "Forest", primary: "#4caf50", secondary: "#8bc34a" },
    PresetTheme { name: "Sunset", primary: "#ff9800", secondary: "#ff5722" },
    PresetTheme { name: "Royal", primary: "#9c27b0", secondary: "#673ab7" },
];

/// Look up a preset by name (case-insensitive)
pub fn find_preset(name: &str) -> Option<&'static PresetTheme> {
    PRESET_THEMES.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Check for a `#rrggbb` or `#rgb` color, as produced by a color input
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 6 || hex.len() == 3) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
