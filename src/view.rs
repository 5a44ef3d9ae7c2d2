//! Dashboard view model
//!
//! Everything the dashboard body renders, computed from the dataset and the
//! customization in one pass: summary cards, a main chart, an optional
//! alternative chart and the raw-data preview.

use crate::constants::MAX_STAT_CARDS;
use crate::data::{ChartSpec, build_series, compute_statistics, plottable_fields};
use crate::data_table::{PreviewTable, format_number};
use crate::settings::Customization;
use crate::types::{ChartKind, Dataset};
use serde::Serialize;

pub const WELCOME_TITLE: &str = "Welcome to Your Dashboard";
pub const WELCOME_MESSAGE: &str = "Upload data or use sample data to get started with visualization.";
pub const MAIN_PANEL_TITLE: &str = "Main Visualization";
pub const ALTERNATIVE_PANEL_TITLE: &str = "Alternative View";
pub const PREVIEW_TITLE: &str = "Raw Data Preview";

/// Summary of one numeric column
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatCard {
    pub field: String,
    /// Upper-cased field name
    pub label: String,
    pub total: String,
    pub average: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartPanel {
    pub title: String,
    pub chart: ChartSpec,
}

impl ChartPanel {
    fn new(title: &str, dataset: &Dataset, kind: ChartKind, palette: &[String]) -> Self {
        Self {
            title: format!("{} ({} Chart)", title, kind.label()),
            chart: build_series(dataset, kind, palette),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DashboardView {
    /// No data loaded yet
    Empty { title: String, message: String },
    Populated {
        stat_cards: Vec<StatCard>,
        main: ChartPanel,
        /// Present when more than one field can be plotted
        alternative: Option<ChartPanel>,
        preview: PreviewTable,
    },
}

impl DashboardView {
    pub fn build(dataset: &Dataset, customization: &Customization) -> Self {
        if dataset.is_empty() {
            return DashboardView::Empty {
                title: WELCOME_TITLE.to_string(),
                message: WELCOME_MESSAGE.to_string(),
            };
        }

        let statistics = compute_statistics(dataset);
        let fields = plottable_fields(dataset);
        let palette = customization.palette();

        let stat_cards = fields
            .iter()
            .take(MAX_STAT_CARDS)
            .map(|field| {
                let stats = statistics.get(field);
                StatCard {
                    field: field.clone(),
                    label: field.to_uppercase(),
                    total: stats
                        .filter(|s| s.total != 0.0)
                        .map(|s| format_number(s.total))
                        .unwrap_or_else(|| "0".to_string()),
                    average: stats
                        .filter(|s| s.average != 0.0)
                        .map(|s| format!("{:.1}", s.average))
                        .unwrap_or_else(|| "0".to_string()),
                }
            })
            .collect();

        let kind = customization.chart_kind;
        let main = ChartPanel::new(MAIN_PANEL_TITLE, dataset, kind, &palette);
        let alternative = (fields.len() > 1)
            .then(|| ChartPanel::new(ALTERNATIVE_PANEL_TITLE, dataset, kind.alternative(), &palette));

        let preview = PreviewTable::build(dataset);

        DashboardView::Populated {
            stat_cards,
            main,
            alternative,
            preview,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DashboardView::Empty { .. })
    }

    pub fn stat_cards(&self) -> &[StatCard] {
        match self {
            DashboardView::Populated { stat_cards, .. } => stat_cards,
            DashboardView::Empty { .. } => &[],
        }
    }
}
