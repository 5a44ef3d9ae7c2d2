//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the serialized shape of the values the UI consumes.
//! Numeric fields are redacted or kept to integers so the snapshots do not
//! depend on float formatting.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::monthly_sales;
use analytics_dashboard::data::{build_series, classify_columns};
use analytics_dashboard::settings::Customization;
use analytics_dashboard::types::ChartKind;
use analytics_dashboard::view::DashboardView;

#[test]
fn snapshot_column_kinds() {
    let ds = monthly_sales(&[("Jan", 500.0), ("Feb", 700.0)]);
    insta::assert_json_snapshot!(classify_columns(&ds), @r#"
    {
      "month": "nonnumeric",
      "sales": "numeric"
    }
    "#);
}

#[test]
fn snapshot_customization() {
    let custom = Customization::default().with_chart_kind(ChartKind::Pie);
    insta::assert_json_snapshot!(custom, @r##"
    {
      "chartType": "pie",
      "primaryColor": "#3f51b5",
      "secondaryColor": "#f50057"
    }
    "##);
}

#[test]
fn snapshot_bar_series_style() {
    let ds = monthly_sales(&[("Jan", 500.0)]);
    let chart = build_series(&ds, ChartKind::Bar, &Customization::default().palette());
    insta::assert_json_snapshot!(chart.series[0].style, {
        ".stroke_width" => "[width]",
        ".fill_opacity" => "[opacity]",
    }, @r##"
    {
      "stroke": null,
      "fill": "#3f51b5",
      "stroke_width": "[width]",
      "fill_opacity": "[opacity]",
      "show_dots": false,
      "stack_id": null,
      "curve": "linear"
    }
    "##);
}

#[test]
fn snapshot_empty_view() {
    let view = DashboardView::build(&Default::default(), &Customization::default());
    insta::assert_json_snapshot!(view, @r#"
    {
      "state": "empty",
      "title": "Welcome to Your Dashboard",
      "message": "Upload data or use sample data to get started with visualization."
    }
    "#);
}

#[test]
fn snapshot_stat_cards() {
    let ds = monthly_sales(&[("Jan", 1500.0), ("Feb", 2250.0)]);
    let view = DashboardView::build(&ds, &Customization::default());
    insta::assert_json_snapshot!(view.stat_cards(), @r#"
    [
      {
        "field": "sales",
        "label": "SALES",
        "total": "3,750",
        "average": "1875.0"
      }
    ]
    "#);
}
