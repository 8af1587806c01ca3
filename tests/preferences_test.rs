// ABOUTME: Tests for the preference store backends and JSON helpers
// ABOUTME: Covers in-memory semantics, file persistence across reopen, and corrupt files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use pierre_strength::{
    config::{PreferencesBackend, PreferencesConfig},
    errors::ErrorCode,
    preferences::{
        factory::create_preference_store, file::FilePreferences, load_json,
        memory::InMemoryPreferences, save_json, PreferenceStore,
    },
};
use tempfile::TempDir;

#[tokio::test]
async fn test_memory_store_basic_operations() {
    init_test_logging();
    let store = InMemoryPreferences::new();

    assert_eq!(store.get("missing").await.unwrap(), None);

    store.set("unit", "kg").await.unwrap();
    assert_eq!(store.get("unit").await.unwrap().as_deref(), Some("kg"));

    store.set("unit", "lbs").await.unwrap();
    assert_eq!(store.get("unit").await.unwrap().as_deref(), Some("lbs"));

    assert!(store.remove("unit").await.unwrap());
    assert!(!store.remove("unit").await.unwrap());
    assert_eq!(store.get("unit").await.unwrap(), None);
}

#[tokio::test]
async fn test_memory_store_keys_sorted_and_clones_share_state() {
    let store = InMemoryPreferences::with_entries([("b", "2"), ("a", "1")]);
    let clone = store.clone();
    clone.set("c", "3").await.unwrap();

    assert_eq!(store.keys().await.unwrap(), vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_json_helpers_round_trip() {
    let store = InMemoryPreferences::new();
    let list = vec!["Squat".to_owned(), "Deadlift".to_owned()];

    save_json(&store, "lists", &list).await.unwrap();
    let loaded: Option<Vec<String>> = load_json(&store, "lists").await.unwrap();
    assert_eq!(loaded, Some(list));

    let absent: Option<Vec<String>> = load_json(&store, "nothing").await.unwrap();
    assert!(absent.is_none());
}

#[tokio::test]
async fn test_json_helper_reports_malformed_values() {
    let store = InMemoryPreferences::with_entries([("broken", "{not json")]);
    let error = load_json::<Vec<String>>(&store, "broken")
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_file_store_starts_empty_when_missing() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");

    let store = FilePreferences::open(&path).await.unwrap();
    assert!(store.keys().await.unwrap().is_empty());
    assert_eq!(store.path(), path.as_path());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_file_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("preferences.json");

    {
        let store = FilePreferences::open(&path).await.unwrap();
        store.set("scoring.weights", "{\"a\":0.5}").await.unwrap();
        store.set("unit", "kg").await.unwrap();
        assert!(store.remove("unit").await.unwrap());
    }

    assert!(path.exists());
    let reopened = FilePreferences::open(&path).await.unwrap();
    assert_eq!(
        reopened.get("scoring.weights").await.unwrap().as_deref(),
        Some("{\"a\":0.5}")
    );
    assert_eq!(reopened.get("unit").await.unwrap(), None);
    assert_eq!(reopened.keys().await.unwrap(), vec!["scoring.weights"]);

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    assert!(!std::path::Path::new(&tmp).exists());
}

#[tokio::test]
async fn test_file_store_empty_file_is_empty_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "  \n").unwrap();

    let store = FilePreferences::open(&path).await.unwrap();
    assert!(store.keys().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_file_store_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let Err(error) = FilePreferences::open(&path).await else {
        panic!("corrupt file should fail to open");
    };
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_factory_selects_backend() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");

    let memory = create_preference_store(&PreferencesConfig {
        backend: PreferencesBackend::Memory,
        path: path.clone(),
    })
    .await
    .unwrap();
    memory.set("k", "v").await.unwrap();
    assert!(!path.exists());

    let file = create_preference_store(&PreferencesConfig {
        backend: PreferencesBackend::File,
        path: path.clone(),
    })
    .await
    .unwrap();
    file.set("k", "v").await.unwrap();
    assert!(path.exists());
}
