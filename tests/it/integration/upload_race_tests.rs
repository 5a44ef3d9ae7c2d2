//! Overlapping uploads: the newest upload wins, stale results are dropped.

use crate::helpers::{corrupt_xlsx_file, xlsx_file};
use analytics_dashboard::Dashboard;
use analytics_dashboard::data::parse_spreadsheet;
use analytics_dashboard::types::DataCell;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(10);

#[test]
fn test_background_upload_applies_on_poll() {
    let mut dashboard = Dashboard::default();
    let ticket = dashboard.begin_upload(xlsx_file("a.xlsx", &[("Jan", 1.0)]));
    assert!(ticket.is_some());
    assert_eq!(dashboard.uploads_in_flight(), 1);

    assert!(dashboard.wait_for_upload(WAIT));
    assert_eq!(dashboard.uploads_in_flight(), 0);
    assert_eq!(dashboard.dataset().row_count(), 1);
}

#[test]
fn test_stale_result_is_discarded() {
    let mut dashboard = Dashboard::default();
    let older_file = xlsx_file("older.xlsx", &[("Jan", 1.0)]);
    let newer_file = xlsx_file("newer.xlsx", &[("Feb", 2.0), ("Mar", 3.0)]);

    // Parse both up front so the completion order is under test control
    let older_result = parse_spreadsheet(&older_file);
    let newer_result = parse_spreadsheet(&newer_file);

    let older = dashboard.begin_upload(older_file).unwrap();
    let newer = dashboard.begin_upload(newer_file).unwrap();
    assert!(newer.generation() > older.generation());

    // Newer finishes first, then the older one straggles in
    assert!(dashboard.complete_upload(newer, newer_result));
    assert!(!dashboard.complete_upload(older, older_result));

    assert_eq!(dashboard.dataset().row_count(), 2);
    assert_eq!(
        dashboard.dataset().rows()[0].get("month"),
        Some(&DataCell::from("Feb"))
    );

    // The background threads deliver their own copies later; the newest
    // data stays in place either way
    dashboard.wait_for_upload(WAIT);
    dashboard.wait_for_upload(WAIT);
    assert_eq!(dashboard.dataset().row_count(), 2);
}

#[test]
fn test_sample_load_supersedes_pending_upload() {
    let mut dashboard = Dashboard::default();
    let file = xlsx_file("slow.xlsx", &[("Jan", 1.0)]);
    let result = parse_spreadsheet(&file);

    let ticket = dashboard.begin_upload(file).unwrap();
    dashboard.load_sample();

    assert!(!dashboard.complete_upload(ticket, result));
    assert_eq!(dashboard.dataset().row_count(), 8);
}

#[test]
fn test_stale_failure_shows_no_toast() {
    let mut dashboard = Dashboard::default();
    let broken = corrupt_xlsx_file();
    let broken_result = parse_spreadsheet(&broken);

    let stale = dashboard.begin_upload(broken).unwrap();
    assert!(dashboard.upload(xlsx_file("good.xlsx", &[("Jan", 5.0)])));
    let toasts = dashboard.toasts().count();

    assert!(!dashboard.complete_upload(stale, broken_result));
    assert_eq!(dashboard.toasts().count(), toasts);
    assert_eq!(dashboard.dataset().row_count(), 1);
}

#[test]
fn test_result_is_applied_only_once_per_ticket() {
    let mut dashboard = Dashboard::default();
    let file = xlsx_file("once.xlsx", &[("Jan", 1.0), ("Feb", 2.0)]);
    let first = parse_spreadsheet(&file);
    let second = parse_spreadsheet(&file);

    let ticket = dashboard.begin_upload(file).unwrap();
    assert!(dashboard.complete_upload(ticket, first));
    let revision = dashboard.state().dataset_revision;
    let toasts = dashboard.toasts().count();

    assert!(!dashboard.complete_upload(ticket, second));
    assert_eq!(dashboard.state().dataset_revision, revision);
    assert_eq!(dashboard.toasts().count(), toasts);

    // The background thread's copy of the same ticket is refused too
    assert!(!dashboard.wait_for_upload(WAIT));
    assert_eq!(dashboard.state().dataset_revision, revision);
    assert_eq!(dashboard.uploads_in_flight(), 0);
}
