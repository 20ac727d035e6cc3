// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, sample businesses, plans and in-memory backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `yellowpages`
//!
//! Fixtures use real places around Kinshasa so distances are easy to sanity-check.

use std::sync::{Arc, Once};

use yellowpages::models::{Business, BusinessLimit, Coordinate, SubscriptionPlan};
use yellowpages::storage::{InMemoryStore, KeyValueStore};
use yp_providers::SyntheticDirectoryProvider;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Gombe, central Kinshasa
pub const GOMBE: Coordinate = Coordinate::new(-4.3035, 15.3118);

/// Kinshasa city reference point
pub const KINSHASA: Coordinate = Coordinate::new(-4.4419, 15.2663);

/// Lubumbashi city reference point
pub const LUBUMBASHI: Coordinate = Coordinate::new(-11.6609, 27.4794);

/// Business at `position`
pub fn business_at(id: u64, name: &str, latitude: f64, longitude: f64) -> Business {
    Business::new(id, name).with_position(latitude, longitude)
}

/// A mix of located, unlocated and badly located businesses
pub fn kinshasa_businesses() -> Vec<Business> {
    vec![
        business_at(1, "Pharmacie Gombe", -4.3050, 15.3120).with_category("Pharmacy"),
        Business::new(2, "Boulangerie sans GPS").with_category("Bakery"),
        business_at(3, "Marché de la Liberté", -4.3600, 15.3500).with_category("Market"),
        business_at(4, "Garage Lubumbashi", -11.6650, 27.4800).with_category("Garage"),
        business_at(5, "Coordonnées cassées", 123.0, 15.0),
        business_at(6, "Restaurant Ngaliema", -4.3300, 15.2600).with_category("Restaurant"),
    ]
}

/// Plan with a fixed business limit
pub fn plan(name: &str, limit: u32) -> SubscriptionPlan {
    SubscriptionPlan::new(name, 9.99, BusinessLimit::Limited(limit))
}

/// Plan without a business limit
pub fn unlimited_plan() -> SubscriptionPlan {
    SubscriptionPlan::new("Premium", 49.0, BusinessLimit::Unlimited)
}

/// Backend serving the Kinshasa fixtures, accepting `token`
pub fn synthetic_backend(token: &str) -> SyntheticDirectoryProvider {
    SyntheticDirectoryProvider::with_businesses(kinshasa_businesses())
        .with_plans(vec![plan("Basic", 1), plan("Pro", 3), unlimited_plan()])
        .with_token(token)
}

/// Fresh in-memory store behind the injected trait object
pub fn memory_store() -> Arc<dyn KeyValueStore> {
    init_test_logging();
    Arc::new(InMemoryStore::new())
}
