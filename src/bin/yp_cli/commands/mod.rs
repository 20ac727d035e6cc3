// ABOUTME: Command modules for yp-cli plus the shared context they run in
// ABOUTME: Builds providers, stores, session and history from the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

pub mod account;
pub mod directory;
pub mod geo;
pub mod limits;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use yellowpages::config::environment::DirectoryConfig;
use yellowpages::history::BrowsingHistory;
use yellowpages::models::Business;
use yellowpages::services::DirectoryService;
use yellowpages::session::AuthSession;
use yellowpages::storage::{JsonFileStore, KeyValueStore};
use yp_providers::{DirectoryProvider, RestDirectoryProvider, SyntheticDirectoryProvider};

/// Everything a command needs from the environment
pub struct Context {
    pub config: DirectoryConfig,
    pub json: bool,
}

impl Context {
    pub const fn new(config: DirectoryConfig, json: bool) -> Self {
        Self { config, json }
    }

    /// Directory service over the backend, or over a local JSON file when given
    pub async fn directory(
        &self,
        file: Option<&Path>,
    ) -> Result<DirectoryService<Box<dyn DirectoryProvider>>> {
        let provider: Box<dyn DirectoryProvider> = match file {
            Some(path) => Box::new(SyntheticDirectoryProvider::with_businesses(
                load_businesses(path).await?,
            )),
            None => Box::new(RestDirectoryProvider::new(&self.config.api)?),
        };
        Ok(DirectoryService::new(provider))
    }

    /// The persisted key-value store
    pub async fn store(&self) -> Result<Arc<dyn KeyValueStore>> {
        let store = JsonFileStore::open(&self.config.storage_path).await?;
        Ok(Arc::new(store))
    }

    pub async fn session(&self) -> Result<AuthSession> {
        Ok(AuthSession::new(self.store().await?))
    }

    pub async fn history(&self) -> Result<BrowsingHistory> {
        Ok(BrowsingHistory::new(
            self.store().await?,
            self.config.recent_limit,
        ))
    }
}

/// Read a JSON array of businesses
pub async fn load_businesses(path: &Path) -> Result<Vec<Business>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of businesses", path.display()))
}
