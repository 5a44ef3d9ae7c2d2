//! Unit tests for preference persistence and the stored JSON format.

use analytics_dashboard::constants::{CUSTOMIZATION_KEY, DATASET_KEY, THEME_KEY};
use analytics_dashboard::data::generate_sample_data;
use analytics_dashboard::preferences::{
    JsonFileStore, MemoryStore, PreferenceStore, load_or_default, save,
};
use analytics_dashboard::settings::Customization;
use analytics_dashboard::types::{ChartKind, Dataset};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn test_customization_uses_stored_key_names() {
    let store = MemoryStore::new();
    let custom = Customization::default()
        .with_chart_kind(ChartKind::Area)
        .with_colors("#2196f3", "#00bcd4");
    save(&store, CUSTOMIZATION_KEY, &custom).unwrap();

    assert_eq!(
        store.get(CUSTOMIZATION_KEY),
        Some(json!({
            "chartType": "area",
            "primaryColor": "#2196f3",
            "secondaryColor": "#00bcd4"
        }))
    );
}

#[test]
fn test_previously_stored_values_load() {
    let store = MemoryStore::new();
    store
        .set(
            DATASET_KEY,
            json!([{ "month": "Jan", "sales": 500, "note": null }, { "month": "Feb", "sales": 650.5 }]),
        )
        .unwrap();
    store.set(THEME_KEY, json!(true)).unwrap();

    let ds: Dataset = load_or_default(&store, DATASET_KEY);
    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.rows()[0].number("sales"), Some(500.0));
    assert_eq!(ds.rows()[1].number("sales"), Some(650.5));
    assert!(load_or_default::<bool>(&store, THEME_KEY));
}

#[test]
fn test_missing_keys_fall_back_to_defaults() {
    let store = MemoryStore::new();
    assert!(load_or_default::<Dataset>(&store, DATASET_KEY).is_empty());
    assert!(!load_or_default::<bool>(&store, THEME_KEY));
    assert_eq!(
        load_or_default::<Customization>(&store, CUSTOMIZATION_KEY),
        Customization::default()
    );
}

#[test]
fn test_dataset_round_trips_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let sample = generate_sample_data();

    {
        let store = JsonFileStore::open(&path).unwrap();
        save(&store, DATASET_KEY, &sample).unwrap();
        save(&store, THEME_KEY, &true).unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.path(), path.as_path());
    let loaded: Dataset = load_or_default(&store, DATASET_KEY);
    assert_eq!(loaded, sample);
    assert_eq!(loaded.column_names(), sample.column_names());
    assert!(load_or_default::<bool>(&store, THEME_KEY));
}

#[test]
fn test_unknown_chart_type_falls_back() {
    let store = MemoryStore::new();
    store
        .set(
            CUSTOMIZATION_KEY,
            json!({ "chartType": "radar", "primaryColor": "#000000", "secondaryColor": "#ffffff" }),
        )
        .unwrap();

    let custom: Customization = load_or_default(&store, CUSTOMIZATION_KEY);
    assert_eq!(custom, Customization::default());
}
