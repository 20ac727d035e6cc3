// ABOUTME: Environment configuration for the directory client
// ABOUTME: Parses backend, proximity, navigation and storage settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

//! Environment-based configuration
//!
//! Every setting has a default so the client runs with an empty
//! environment; malformed values are rejected rather than silently replaced.

use std::env;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;
use yp_intelligence::NavigationProvider;
use yp_providers::RestProviderConfig;

use crate::constants::defaults;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Complete client configuration
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Backend connection settings
    pub api: RestProviderConfig,
    /// Radius used when the caller does not choose one
    pub default_radius_km: f64,
    /// Map application used for navigation links
    pub navigation_provider: NavigationProvider,
    /// Location of the persisted key-value store
    pub storage_path: PathBuf,
    /// Maximum entries per history list
    pub recent_limit: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            api: RestProviderConfig::default(),
            default_radius_km: defaults::RADIUS_KM,
            navigation_provider: NavigationProvider::default(),
            storage_path: default_storage_path(),
            recent_limit: defaults::RECENT_LIMIT,
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable if a value is present but malformed
    pub fn from_env() -> Result<Self> {
        let base_url = env_var_or("YP_API_BASE_URL", defaults::API_BASE_URL);
        Url::parse(&base_url).with_context(|| format!("Invalid YP_API_BASE_URL '{base_url}'"))?;

        let timeout_secs: u64 = parse_env("YP_HTTP_TIMEOUT_SECS", defaults::HTTP_TIMEOUT_SECS)?;
        let connect_timeout_secs: u64 = parse_env(
            "YP_HTTP_CONNECT_TIMEOUT_SECS",
            defaults::HTTP_CONNECT_TIMEOUT_SECS,
        )?;

        let default_radius_km: f64 = parse_env("YP_DEFAULT_RADIUS_KM", defaults::RADIUS_KM)?;
        if !default_radius_km.is_finite() || default_radius_km <= 0.0 {
            bail!("YP_DEFAULT_RADIUS_KM must be a positive number, got {default_radius_km}");
        }

        let navigation_provider = match env::var("YP_NAVIGATION_PROVIDER") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid YP_NAVIGATION_PROVIDER '{value}'"))?,
            Err(_) => NavigationProvider::default(),
        };

        let storage_path = env::var("YP_STORAGE_PATH")
            .map_or_else(|_| default_storage_path(), PathBuf::from);

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            api: RestProviderConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
                connect_timeout: Duration::from_secs(connect_timeout_secs),
            },
            default_radius_km,
            navigation_provider,
            storage_path,
            recent_limit: parse_env("YP_RECENT_LIMIT", defaults::RECENT_LIMIT)?,
        };

        info!(
            environment = %config.environment,
            api = %config.api.base_url,
            storage = %config.storage_path.display(),
            "Configuration loaded from environment"
        );

        Ok(config)
    }
}

/// Platform data directory location of the file store
fn default_storage_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(defaults::STORAGE_DIR)
        .join(defaults::STORAGE_FILE)
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when it is unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value '{value}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_default_storage_path_ends_with_store_file() {
        let path = default_storage_path();
        assert!(path.ends_with("yellowpages/storage.json"));
    }
}
