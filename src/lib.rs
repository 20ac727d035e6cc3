// ABOUTME: Main library entry point for the Yellow Pages directory client
// ABOUTME: Composes backend access, proximity search, subscription gating and local state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

#![deny(unsafe_code)]

//! # Yellow Pages Directory
//!
//! Client-side core of a business directory: find businesses near the user,
//! decide whether the user may list another business under their plan, and
//! keep the small amount of state that survives restarts (session token,
//! recent searches, recently viewed businesses).
//!
//! ## Architecture
//!
//! - **yp-core**: errors, constants and models shared by every crate
//! - **yp-intelligence**: pure geo and subscription-limit functions
//! - **yp-providers**: the backend REST interface
//! - this crate: configuration, logging, storage, session, history and the
//!   `DirectoryService` every call site goes through
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use yellowpages::config::environment::DirectoryConfig;
//! use yellowpages::services::DirectoryService;
//! use yellowpages::models::Coordinate;
//! use yp_providers::RestDirectoryProvider;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DirectoryConfig::from_env()?;
//!     let provider = RestDirectoryProvider::new(&config.api)?;
//!     let service = DirectoryService::new(provider);
//!
//!     let here = Coordinate::new(-4.3217, 15.3125);
//!     for hit in service.nearby_businesses(here, config.default_radius_km).await? {
//!         println!("{} ({:.1} km)", hit.entity.name, hit.distance_km);
//!     }
//!     Ok(())
//! }
//! ```

// Re-export yp-core and yp-intelligence so binaries and tests have one import root
pub use yp_core::constants;
pub use yp_core::errors;
pub use yp_core::models;
pub use yp_intelligence as intelligence;

/// Environment-driven configuration
pub mod config;

/// Browsing history kept in the key-value store
pub mod history;

/// Structured logging setup
pub mod logging;

/// Directory service composing provider and policy logic
pub mod services;

/// Session token kept in the key-value store
pub mod session;

/// Injected key-value storage for persisted client state
pub mod storage;
