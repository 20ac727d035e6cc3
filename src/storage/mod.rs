// ABOUTME: Key-value storage abstraction for client state that survives restarts
// ABOUTME: Pluggable backends (in-memory, JSON file) behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

/// JSON file backed store
pub mod file;
/// In-memory store for tests and ephemeral sessions
pub mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppResult;

/// String key-value store the session and history modules write through
///
/// Implementations are injected, so callers never reach for a global store.
///
/// # Examples
///
/// ```rust,no_run
/// use yellowpages::storage::{InMemoryStore, KeyValueStore, KeyValueStoreExt};
/// # async fn example() -> Result<(), yellowpages::errors::AppError> {
/// let store = InMemoryStore::new();
/// store.set("greeting", "hello").await?;
/// store.set_json("numbers", &vec![1, 2, 3]).await?;
///
/// let numbers: Option<Vec<u32>> = store.get_json("numbers").await?;
/// assert_eq!(numbers, Some(vec![1, 2, 3]));
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key was never written or was removed
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete a key; removing a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Typed JSON helpers available on every store
#[async_trait]
pub trait KeyValueStoreExt: KeyValueStore {
    /// Read and deserialize a JSON value
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the stored text is not valid JSON for `T`
    async fn get_json<T>(&self, key: &str) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        match self.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and write a JSON value
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` or `StorageError`
    async fn set_json<T>(&self, key: &str, value: &T) -> AppResult<()>
    where
        T: Serialize + Sync,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw).await
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}
