//! Unit tests for chart series mapping.

use crate::helpers::{TestDatasetBuilder, monthly_sales};
use analytics_dashboard::data::{build_series, compute_statistics, generate_sample_data};
use analytics_dashboard::settings::Customization;
use analytics_dashboard::types::{ChartKind, DataCell, Dataset, Row};

fn default_palette() -> Vec<String> {
    Customization::default().palette()
}

#[test]
fn test_single_row_line_chart() {
    let ds = monthly_sales(&[("Jan", 500.0)]);
    let chart = build_series(&ds, ChartKind::Line, &default_palette());

    assert_eq!(chart.category_axis.as_deref(), Some("month"));
    assert_eq!(chart.categories, vec!["Jan"]);
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].field, "sales");
    assert_eq!(chart.series[0].values, vec![Some(500.0)]);
    assert_eq!(chart.series[0].style.stroke.as_deref(), Some("#3f51b5"));
}

#[test]
fn test_pie_on_sample_data_matches_totals() {
    let ds = generate_sample_data();
    let stats = compute_statistics(&ds);
    let chart = build_series(&ds, ChartKind::Pie, &default_palette());

    assert!(chart.category_axis.is_none());
    assert_eq!(chart.slices.len(), 4);
    for slice in &chart.slices {
        assert_eq!(slice.value, stats.get(&slice.name).unwrap().total);
    }
    assert!(chart.slices.iter().all(|s| s.name != "id"));
}

#[test]
fn test_palette_wraps_past_five_fields() {
    let columns = ["label", "a", "b", "c", "d", "e", "f", "g"];
    let mut cells: Vec<DataCell> = vec!["row".into()];
    cells.extend((0..7).map(|i| DataCell::from(i as f64)));
    let ds = TestDatasetBuilder::new(&columns).row(cells).build();

    let palette = default_palette();
    let chart = build_series(&ds, ChartKind::Bar, &palette);

    assert_eq!(chart.series.len(), 7);
    for (i, series) in chart.series.iter().enumerate() {
        assert_eq!(series.style.fill.as_deref(), Some(palette[i % palette.len()].as_str()));
    }
}

#[test]
fn test_missing_values_become_gaps() {
    let ds = TestDatasetBuilder::new(&["month", "sales"])
        .row(vec!["Jan".into(), 1.0.into()])
        .row(vec!["Feb".into(), DataCell::Empty])
        .row(vec!["Mar".into(), "oops".into()])
        .build();

    let chart = build_series(&ds, ChartKind::Area, &default_palette());
    assert_eq!(chart.series[0].values, vec![Some(1.0), None, None]);
    assert_eq!(chart.categories, vec!["Jan", "Feb", "Mar"]);
}

#[test]
fn test_every_kind_handles_empty_dataset() {
    for kind in ChartKind::all() {
        let chart = build_series(&Dataset::empty(), *kind, &default_palette());
        assert!(chart.is_empty(), "{:?} should be empty", kind);
        assert_eq!(chart.series_count(), 0);
    }
}

#[test]
fn test_text_only_dataset_is_empty_chart() {
    let ds = Dataset::new(vec![Row::new().with("name", "a").with("city", "b")]);
    assert!(build_series(&ds, ChartKind::Line, &default_palette()).is_empty());
}

#[test]
fn test_first_key_is_category_axis_even_when_numeric() {
    let ds = Dataset::new(vec![
        Row::new().with("year", 2023.0).with("units", 5.0),
        Row::new().with("year", 2024.0).with("units", 7.0),
    ]);

    let chart = build_series(&ds, ChartKind::Line, &default_palette());
    assert_eq!(chart.category_axis.as_deref(), Some("year"));
    assert_eq!(chart.categories, vec!["2023", "2024"]);
    // The axis column is still plotted as a series
    assert_eq!(chart.series_count(), 2);
}

#[test]
fn test_alternative_kind() {
    assert_eq!(ChartKind::Pie.alternative(), ChartKind::Bar);
    assert_eq!(ChartKind::Line.alternative(), ChartKind::Pie);
    assert_eq!(ChartKind::Area.alternative(), ChartKind::Pie);
}
