// ABOUTME: Authentication session persisted through the injected key-value store
// ABOUTME: Holds the bearer token; logging out also wipes per-user browsing history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use std::sync::Arc;

use tracing::info;

use crate::constants::storage_keys::{AUTH_TOKEN, RECENTLY_VIEWED, RECENT_SEARCHES};
use crate::errors::{AppError, AppResult};
use crate::storage::KeyValueStore;

/// Bearer token of the signed-in user
#[derive(Clone)]
pub struct AuthSession {
    store: Arc<dyn KeyValueStore>,
}

impl AuthSession {
    /// Create a session over `store`
    #[must_use]
    pub const fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored token, if signed in
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read
    pub async fn token(&self) -> AppResult<Option<String>> {
        self.store.get(AUTH_TOKEN).await
    }

    /// Stored token, or `AuthRequired` when signed out
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` if no token is stored
    pub async fn require_token(&self) -> AppResult<String> {
        self.token().await?.ok_or_else(AppError::auth_required)
    }

    /// Whether a token is stored
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read
    pub async fn is_authenticated(&self) -> AppResult<bool> {
        Ok(self.token().await?.is_some())
    }

    /// Store a token obtained from the backend
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank token
    pub async fn login(&self, token: &str) -> AppResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::invalid_input("Token must not be empty"));
        }
        self.store.set(AUTH_TOKEN, token).await?;
        info!("Session token stored");
        Ok(())
    }

    /// Forget the token and the browsing history tied to it
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written
    pub async fn logout(&self) -> AppResult<()> {
        for key in [AUTH_TOKEN, RECENT_SEARCHES, RECENTLY_VIEWED] {
            self.store.remove(key).await?;
        }
        info!("Session cleared");
        Ok(())
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession").finish_non_exhaustive()
    }
}
