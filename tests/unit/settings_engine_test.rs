//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, validation and reset.

use search_history::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use search_history::types::errors::SettingsError;
use search_history::types::settings::{StorageBackend, StoreSettings};
use serde_json::json;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, StoreSettings::default());
    assert_eq!(settings.max_history_size, 20);
    assert_eq!(settings.suggestion_limit, 5);
    assert_eq!(settings.storage_key(), "app-search-history");
}

/// A change made through `set_value` must be visible to a fresh engine
/// reading the same file.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_value("namespace", json!("media")).unwrap();
        engine.set_value("backend", json!("file")).unwrap();
    }

    let mut engine2 = engine_in_temp(&dir);
    let loaded = engine2.load().unwrap();
    assert_eq!(loaded.namespace, "media");
    assert_eq!(loaded.backend, StorageBackend::File);
    assert_eq!(loaded.storage_key(), "media-search-history");
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.set_value("max_history_size", json!(50)).unwrap();
        assert_eq!(engine.get_settings().max_history_size, 50);

        engine.reset().unwrap();
        assert_eq!(*engine.get_settings(), StoreSettings::default());
    }

    let mut engine2 = engine_in_temp(&dir);
    assert_eq!(engine2.load().unwrap(), StoreSettings::default());
}

#[test]
fn test_unknown_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    assert!(matches!(
        engine.set_value("theme", json!("dark")),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("", json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_wrong_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    assert!(matches!(
        engine.set_value("max_history_size", json!("lots")),
        Err(SettingsError::InvalidValue(_))
    ));
    assert!(matches!(
        engine.set_value("backend", json!("redis")),
        Err(SettingsError::InvalidValue(_))
    ));
    assert_eq!(*engine.get_settings(), StoreSettings::default());
}

#[test]
fn test_malformed_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(
        engine.load(),
        Err(SettingsError::SerializationError(_))
    ));
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), r#"{"max_history_size": 3}"#).unwrap();

    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();
    assert_eq!(loaded.max_history_size, 3);
    assert_eq!(loaded.namespace, "app");
    assert_eq!(loaded.backend, StorageBackend::Sqlite);
}

#[test]
fn test_out_of_range_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), r#"{"suggestion_limit": 0}"#).unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(engine.load(), Err(SettingsError::InvalidValue(_))));
}

#[test]
fn test_replace_persists_whole_settings_and_rejects_invalid() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    let wanted = StoreSettings {
        namespace: "media".to_string(),
        backend: StorageBackend::Memory,
        ..StoreSettings::default()
    };

    engine.replace(wanted.clone()).unwrap();
    let mut fresh = engine_in_temp(&dir);
    assert_eq!(fresh.load().unwrap(), wanted);

    let invalid = StoreSettings {
        max_history_size: 0,
        ..StoreSettings::default()
    };
    assert!(matches!(engine.replace(invalid), Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings(), &wanted);
}
