//! Chart data processing engine
//!
//! Turns a dataset plus a chart kind and palette into a [`ChartSpec`] that a
//! rendering library can draw directly. All column inference happens here so
//! the render path only reads prepared series.

use crate::constants::{AREA_FILL_OPACITY, DEFAULT_SERIES_COLOR, SERIES_STROKE_WIDTH};
use crate::data::statistics::plottable_fields;
use crate::types::{ChartKind, Dataset};
use serde::Serialize;

/// Chart-ready description of one chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Type of chart to render
    pub kind: ChartKind,
    /// Column used for the category (X) axis; `None` for pie charts
    pub category_axis: Option<String>,
    /// Per-row category labels, aligned with each series' values
    pub categories: Vec<String>,
    /// One series per plottable numeric column (line/bar/area)
    pub series: Vec<SeriesSpec>,
    /// One slice per plottable numeric column (pie)
    pub slices: Vec<PieSlice>,
}

impl ChartSpec {
    fn empty(kind: ChartKind) -> Self {
        Self {
            kind,
            category_axis: None,
            categories: Vec::new(),
            series: Vec::new(),
            slices: Vec::new(),
        }
    }

    /// True when there is nothing to plot; callers show the empty state
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.slices.is_empty()
    }

    /// Number of plottable series or slices
    pub fn series_count(&self) -> usize {
        match self.kind {
            ChartKind::Pie => self.slices.len(),
            _ => self.series.len(),
        }
    }
}

/// A single plotted column
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesSpec {
    /// Source column name (also the legend label)
    pub field: String,
    /// Per-row values; `None` where the row has no number for this column
    pub values: Vec<Option<f64>>,
    pub style: SeriesStyle,
}

/// Visual styling for one series
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesStyle {
    pub stroke: Option<String>,
    pub fill: Option<String>,
    pub stroke_width: f32,
    pub fill_opacity: f32,
    pub show_dots: bool,
    /// Series sharing a stack id are stacked on top of each other
    pub stack_id: Option<String>,
    pub curve: Curve,
}

/// Interpolation between points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    Linear,
    Monotone,
}

/// A single pie slice: one column's sum across all rows
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl PieSlice {
    /// Share of the whole pie, 0.0 to 1.0
    pub fn fraction_of(&self, slices: &[PieSlice]) -> f64 {
        let sum: f64 = slices.iter().map(|s| s.value).sum();
        if sum == 0.0 { 0.0 } else { self.value / sum }
    }

    /// Label in the form `name: 42%`
    pub fn label(&self, slices: &[PieSlice]) -> String {
        format!("{}: {:.0}%", self.name, self.fraction_of(slices) * 100.0)
    }
}

/// Color for series `index`, wrapping around the palette
pub fn palette_color(palette: &[String], index: usize) -> String {
    if palette.is_empty() {
        return DEFAULT_SERIES_COLOR.to_string();
    }
    palette[index % palette.len()].clone()
}

/// Build the chart description for a dataset
///
/// This performs:
/// 1. Plottable column inference from the first row
/// 2. Category axis selection (first key of the first row)
/// 3. Per-row series extraction, or per-column sums for pie charts
/// 4. Color assignment by position modulo palette length
pub fn build_series(dataset: &Dataset, kind: ChartKind, palette: &[String]) -> ChartSpec {
    if dataset.is_empty() {
        return ChartSpec::empty(kind);
    }

    let fields = plottable_fields(dataset);
    if fields.is_empty() {
        return ChartSpec::empty(kind);
    }

    if kind == ChartKind::Pie {
        let slices = fields
            .into_iter()
            .enumerate()
            .map(|(i, field)| {
                let value = dataset.rows().iter().filter_map(|row| row.number(&field)).sum::<f64>();
                PieSlice {
                    name: field,
                    value,
                    color: palette_color(palette, i),
                }
            })
            .collect();

        return ChartSpec {
            slices,
            ..ChartSpec::empty(kind)
        };
    }

    // First key wins, even when it is numeric
    let category_axis = dataset
        .first_row()
        .and_then(|row| row.keys().next())
        .map(str::to_string);

    let categories = match &category_axis {
        Some(axis) => dataset
            .rows()
            .iter()
            .map(|row| row.get(axis).map(|c| c.to_display_string()).unwrap_or_default())
            .collect(),
        None => Vec::new(),
    };

    let series = fields
        .into_iter()
        .enumerate()
        .map(|(i, field)| {
            let values = dataset.rows().iter().map(|row| row.number(&field)).collect();
            SeriesSpec {
                style: series_style(kind, palette_color(palette, i)),
                field,
                values,
            }
        })
        .collect();

    ChartSpec {
        kind,
        category_axis,
        categories,
        series,
        slices: Vec::new(),
    }
}

fn series_style(kind: ChartKind, color: String) -> SeriesStyle {
    match kind {
        ChartKind::Bar => SeriesStyle {
            stroke: None,
            fill: Some(color),
            stroke_width: 0.0,
            fill_opacity: 1.0,
            show_dots: false,
            stack_id: None,
            curve: Curve::Linear,
        },
        ChartKind::Area => SeriesStyle {
            stroke: Some(color.clone()),
            fill: Some(color),
            stroke_width: SERIES_STROKE_WIDTH,
            fill_opacity: AREA_FILL_OPACITY,
            show_dots: false,
            stack_id: Some("1".to_string()),
            curve: Curve::Monotone,
        },
        ChartKind::Line | ChartKind::Pie => SeriesStyle {
            stroke: Some(color),
            fill: None,
            stroke_width: SERIES_STROKE_WIDTH,
            fill_opacity: 1.0,
            show_dots: true,
            stack_id: None,
            curve: Curve::Monotone,
        },
    }
}
