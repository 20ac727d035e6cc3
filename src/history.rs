// ABOUTME: Recent searches and recently viewed businesses kept in the key-value store
// ABOUTME: Lists are most-recent-first, de-duplicated and capped at a configured size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::storage_keys::{RECENTLY_VIEWED, RECENT_SEARCHES};
use crate::errors::AppResult;
use crate::models::{Business, BusinessId};
use crate::storage::{KeyValueStore, KeyValueStoreExt};

/// A business the user opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewedBusiness {
    /// Business identifier
    pub id: BusinessId,
    /// Name at the time it was viewed
    pub name: String,
    /// When it was last viewed
    pub viewed_at: DateTime<Utc>,
}

/// Browsing history over an injected store
#[derive(Clone)]
pub struct BrowsingHistory {
    store: Arc<dyn KeyValueStore>,
    limit: usize,
}

impl BrowsingHistory {
    /// Create a history keeping at most `limit` entries per list
    #[must_use]
    pub const fn new(store: Arc<dyn KeyValueStore>, limit: usize) -> Self {
        Self { store, limit }
    }

    /// Recent search queries, most recent first
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read
    pub async fn recent_searches(&self) -> AppResult<Vec<String>> {
        self.load(RECENT_SEARCHES).await
    }

    /// Record a search; blank queries are ignored and repeats move to the front
    ///
    /// Repeats are matched case-insensitively; the latest spelling wins.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written
    pub async fn record_search(&self, query: &str) -> AppResult<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        let mut searches = self.recent_searches().await?;
        let lowered = query.to_lowercase();
        searches.retain(|existing| existing.to_lowercase() != lowered);
        searches.insert(0, query.to_owned());
        searches.truncate(self.limit);

        debug!(entries = searches.len(), "Recorded search");
        self.store.set_json(RECENT_SEARCHES, &searches).await
    }

    /// Recently viewed businesses, most recent first
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read
    pub async fn recently_viewed(&self) -> AppResult<Vec<ViewedBusiness>> {
        self.load(RECENTLY_VIEWED).await
    }

    /// Record that `business` was opened now
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written
    pub async fn record_view(&self, business: &Business) -> AppResult<()> {
        let mut viewed = self.recently_viewed().await?;
        viewed.retain(|entry| entry.id != business.id);
        viewed.insert(
            0,
            ViewedBusiness {
                id: business.id,
                name: business.name.clone(),
                viewed_at: Utc::now(),
            },
        );
        viewed.truncate(self.limit);

        debug!(business_id = business.id, entries = viewed.len(), "Recorded view");
        self.store.set_json(RECENTLY_VIEWED, &viewed).await
    }

    /// Forget both lists
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written
    pub async fn clear(&self) -> AppResult<()> {
        self.store.remove(RECENT_SEARCHES).await?;
        self.store.remove(RECENTLY_VIEWED).await
    }

    /// Load a list, treating unreadable JSON as an empty history
    async fn load<T>(&self, key: &str) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                warn!(key, error = %e, "Discarding unreadable history");
                Ok(Vec::new())
            }
        }
    }
}

impl std::fmt::Debug for BrowsingHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowsingHistory")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}
