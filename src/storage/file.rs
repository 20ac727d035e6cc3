// ABOUTME: Key-value store persisted as a single JSON object on disk
// ABOUTME: Writes go through a temporary file and rename so a crash never leaves half a file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};

/// Store whose whole content lives in one JSON file
///
/// The file is read once on open; every mutation rewrites it while holding
/// the lock, so concurrent writers from the same process never interleave.
/// The in-memory view only changes once the file write has succeeded.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file exists but cannot be read or is not
    /// a JSON object of strings
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::storage(format!("Corrupt store file {}: {e}", path.display()))
                    .with_source(e)
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store file not found, starting empty");
                BTreeMap::new()
            }
            Err(e) => {
                return Err(
                    AppError::storage(format!("Cannot read {}: {e}", path.display()))
                        .with_source(e),
                )
            }
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!("Cannot create {}: {e}", parent.display()))
                    .with_source(e)
            })?;
        }

        let raw = serde_json::to_string_pretty(entries)?;
        let temp = temp_path(&self.path);
        fs::write(&temp, raw).await.map_err(|e| {
            AppError::storage(format!("Cannot write {}: {e}", temp.display())).with_source(e)
        })?;
        fs::rename(&temp, &self.path).await.map_err(|e| {
            AppError::storage(format!("Cannot replace {}: {e}", self.path.display()))
                .with_source(e)
        })
    }
}

/// Sibling path used for the write-then-rename
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("store"), OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().await;
        let mut next = entries.clone();
        next.insert(key.to_owned(), value.to_owned());
        self.persist(&next).await?;
        *entries = next;
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().await;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next).await?;
        *entries = next;
        Ok(())
    }
}
