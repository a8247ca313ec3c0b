//! Persistence round-trip and edge case tests.

use std::path::PathBuf;
use tempfile::TempDir;

use crate::persistence::{load_json, load_json_or_default, save_json};
use crate::settings_store::{LogLevel, Settings, SettingsStore};
use factcard_core::RevealStrategy;

// ============================================================================
// JSON Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_save_and_load_settings() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("settings.json");

    let settings = Settings {
        daily_limit: 4,
        reveal_strategy: RevealStrategy::ShowThenReconcile,
        log_level: LogLevel::Debug,
        ..Settings::default()
    };

    save_json(&file_path, &settings).await.unwrap();
    let loaded: Settings = load_json(&file_path).await.unwrap();

    assert_eq!(loaded, settings);
}

#[tokio::test]
async fn test_save_creates_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("factcard").join("quota.json");

    save_json(&nested, &serde_json::json!({"key": "value"}))
        .await
        .unwrap();
    assert!(nested.exists());
    // The temp file is renamed away.
    assert!(!nested.with_extension("json.tmp").exists());
}

#[cfg(unix)]
#[tokio::test]
async fn test_saved_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    save_json(&path, &Settings::default()).await.unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[tokio::test]
async fn test_load_nonexistent_file() {
    let file_path = PathBuf::from("/nonexistent/path/settings.json");

    let result: Result<Settings, _> = load_json(&file_path).await;
    assert!(result.unwrap_err().is_not_found());

    let fallback: Settings = load_json_or_default(&file_path).await;
    assert_eq!(fallback, Settings::default());
}

// ============================================================================
// Settings Store Tests
// ============================================================================

#[tokio::test]
async fn test_settings_store_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let store = SettingsStore::load(path.clone()).await.unwrap();
    store.update(|s| s.daily_limit = 2).await;
    store.save().await.unwrap();

    let reloaded = SettingsStore::load(path).await.unwrap();
    assert_eq!(reloaded.get().await.daily_limit, 2);
}

#[tokio::test]
async fn test_settings_store_corrupt_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    tokio::fs::write(&path, "not json at all").await.unwrap();

    let store = SettingsStore::load(path).await.unwrap();
    assert_eq!(store.get().await, Settings::default());
}

#[tokio::test]
async fn test_settings_store_refuses_invalid_save() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let store = SettingsStore::new(path.clone());
    store.update(|s| s.timeouts.pipeline_ms = 0).await;
    assert!(store.save().await.is_err());
    assert!(!path.exists());

    store.reset().await;
    store.save().await.unwrap();
    assert!(path.exists());
}
