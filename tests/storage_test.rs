// ABOUTME: Integration tests for the key-value store backends
// ABOUTME: Validates in-memory and JSON file stores, persistence across reopen and typed helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::init_test_logging;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;
use yellowpages::errors::{AppResult, ErrorCode};
use yellowpages::storage::{InMemoryStore, JsonFileStore, KeyValueStore, KeyValueStoreExt};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Prefs {
    radius_km: f64,
    provider: String,
}

async fn exercise_basic_contract(store: &dyn KeyValueStore) {
    assert_eq!(store.get("missing").await.unwrap(), None);

    store.set("token", "abc").await.unwrap();
    assert_eq!(store.get("token").await.unwrap().as_deref(), Some("abc"));

    store.set("token", "def").await.unwrap();
    assert_eq!(store.get("token").await.unwrap().as_deref(), Some("def"));

    store.remove("token").await.unwrap();
    assert_eq!(store.get("token").await.unwrap(), None);
    store.remove("token").await.unwrap();
}

#[tokio::test]
async fn test_in_memory_store_contract() {
    init_test_logging();
    exercise_basic_contract(&InMemoryStore::new()).await;
}

#[tokio::test]
async fn test_file_store_contract() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("storage.json"))
        .await
        .unwrap();
    exercise_basic_contract(&store).await;
}

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("state").join("storage.json");

    {
        let store = JsonFileStore::open(&path).await.unwrap();
        store.set("auth_token", "t0k3n").await.unwrap();
        store
            .set_json(
                "prefs",
                &Prefs {
                    radius_km: 5.0,
                    provider: "osm".to_owned(),
                },
            )
            .await
            .unwrap();
    }

    assert!(path.exists());
    assert!(!path.with_file_name("storage.json.tmp").exists());

    let reopened = JsonFileStore::open(&path).await.unwrap();
    assert_eq!(
        reopened.get("auth_token").await.unwrap().as_deref(),
        Some("t0k3n")
    );
    let prefs: Prefs = reopened.get_json("prefs").await.unwrap().unwrap();
    assert_eq!(prefs.provider, "osm");
}

#[tokio::test]
async fn test_corrupt_store_file_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    tokio::fs::write(&path, "{not json").await.unwrap();

    let err = JsonFileStore::open(&path).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_empty_store_file_opens_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    tokio::fs::write(&path, "").await.unwrap();

    let store = JsonFileStore::open(&path).await.unwrap();
    assert_eq!(store.get("anything").await.unwrap(), None);
}

#[tokio::test]
async fn test_get_json_reports_bad_payload() {
    let store = InMemoryStore::new();
    store.set("prefs", "[1, 2").await.unwrap();

    let result: AppResult<Option<Prefs>> = store.get_json("prefs").await;
    let err = result.unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_concurrent_writers_through_shared_handle() {
    let dir = TempDir::new().unwrap();
    let store: Arc<dyn KeyValueStore> = Arc::new(
        JsonFileStore::open(dir.path().join("storage.json"))
            .await
            .unwrap(),
    );

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.set(&format!("key-{i}"), "v").await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let reopened = JsonFileStore::open(dir.path().join("storage.json"))
        .await
        .unwrap();
    for i in 0..8 {
        assert!(reopened.get(&format!("key-{i}")).await.unwrap().is_some());
    }
}

#[tokio::test]
async fn test_file_store_failed_write_leaves_entries_unchanged() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let parent = dir.path().join("sub");
    let store = JsonFileStore::open(parent.join("storage.json"))
        .await
        .unwrap();
    store.set("auth_token", "old").await.unwrap();

    // A regular file where the parent directory should be makes every write fail
    std::fs::remove_dir_all(&parent).unwrap();
    std::fs::write(&parent, b"not a directory").unwrap();

    let err = store.set("auth_token", "secret").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(
        store.get("auth_token").await.unwrap().as_deref(),
        Some("old")
    );

    assert!(store.remove("auth_token").await.is_err());
    assert_eq!(
        store.get("auth_token").await.unwrap().as_deref(),
        Some("old")
    );
}
