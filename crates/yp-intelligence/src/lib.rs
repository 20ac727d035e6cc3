// ABOUTME: Geo-proximity and subscription-limit logic for the Yellow Pages directory
// ABOUTME: Stateless, synchronous functions safe to call from any thread
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

#![deny(unsafe_code)]

//! # Yellow Pages Intelligence
//!
//! The pieces of the directory with precise, testable semantics:
//!
//! - **geo**: haversine distance, coordinate validation, distance formatting
//!   and navigation URLs
//! - **proximity**: radius filtering and distance ranking of businesses
//! - **`subscription_limits`**: the single source of truth for whether a user
//!   may create another business
//!
//! None of these functions perform I/O or keep state; callers re-invoke them
//! whenever their inputs change.

// Re-export yp-core modules so callers can depend on this crate alone
pub use yp_core::errors;
pub use yp_core::models;

/// Great-circle distance, coordinate validity, formatting and navigation URLs
pub mod geo;
/// Radius filtering and distance ranking
pub mod proximity;
/// Subscription-gated business creation
pub mod subscription_limits;

pub use geo::{
    build_navigation_url, format_distance, haversine_distance_km, is_valid_coordinate,
    NavigationProvider,
};
pub use proximity::{annotate_distances, filter_by_proximity};
pub use subscription_limits::{evaluate_limit, upgrade_prompt};
