//! Unit tests for notifications module.

use analytics_dashboard::notifications::{Toast, ToastManager, ToastVariant};
use std::time::Duration;

#[test]
fn test_toast_creation() {
    let toast = Toast::success("Test message");
    assert_eq!(toast.message, "Test message");
    assert_eq!(toast.variant, ToastVariant::Success);
    assert_eq!(toast.duration, Duration::from_secs(3));
}

#[test]
fn test_error_toasts_stay_longer() {
    assert!(Toast::error("x").duration > Toast::success("x").duration);
}

#[test]
fn test_toast_manager() {
    let mut manager = ToastManager::new();
    assert_eq!(manager.count(), 0);

    manager.push(Toast::success("Message 1"));
    assert_eq!(manager.count(), 1);

    let second = Toast::error("Message 2");
    let second_id = second.id;
    manager.push(second);
    assert_eq!(manager.latest().map(|t| t.id), Some(second_id));

    manager.remove(second_id);
    assert_eq!(manager.count(), 1);

    manager.clear();
    assert_eq!(manager.count(), 0);
}

#[test]
fn test_zero_duration_toast_is_pruned() {
    let mut manager = ToastManager::new();
    manager.push(Toast::info("gone").with_duration(Duration::ZERO));
    manager.push(Toast::info("kept").with_duration(Duration::from_secs(60)));

    manager.prune();
    assert_eq!(manager.count(), 1);
    assert_eq!(manager.toasts()[0].message, "kept");
}

#[test]
fn test_toast_opacity_fresh() {
    let toast = Toast::success("Fresh").with_duration(Duration::from_secs(10));
    assert_eq!(toast.opacity(false), 1.0);
    assert_eq!(toast.opacity(true), 1.0);
    assert!(toast.remaining_percent() > 0.99);
}
