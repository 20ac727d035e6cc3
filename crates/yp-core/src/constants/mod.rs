// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for geo math, subscriptions, navigation and storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Geodesy constants
pub mod geo {
    /// Mean Earth radius used by the haversine formula
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
    /// Minimum valid latitude in degrees
    pub const MIN_LATITUDE: f64 = -90.0;
    /// Maximum valid latitude in degrees
    pub const MAX_LATITUDE: f64 = 90.0;
    /// Minimum valid longitude in degrees
    pub const MIN_LONGITUDE: f64 = -180.0;
    /// Maximum valid longitude in degrees
    pub const MAX_LONGITUDE: f64 = 180.0;
    /// Meters per kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
}

/// Subscription plan constants
pub mod subscription {
    /// Business limit granted when the user has no active subscription
    pub const FREE_TIER_BUSINESS_LIMIT: u32 = 1;
    /// Backend wire value meaning "unlimited businesses"
    pub const UNLIMITED_SENTINEL: i64 = -1;
    /// Remaining-slot count that triggers an "approaching limit" prompt
    pub const APPROACHING_LIMIT_SLOTS: u32 = 1;
}

/// External map navigation URL prefixes
pub mod navigation {
    /// Google Maps directions endpoint
    pub const GOOGLE_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1&destination=";
    /// Apple Maps directions endpoint
    pub const APPLE_DIRECTIONS_URL: &str = "https://maps.apple.com/?daddr=";
    /// `OpenStreetMap` directions endpoint
    pub const OSM_DIRECTIONS_URL: &str = "https://www.openstreetmap.org/directions?to=";
}

/// Key names used in the persisted key-value store
pub mod storage_keys {
    /// Bearer token for the directory backend
    pub const AUTH_TOKEN: &str = "auth_token";
    /// Most-recent-first list of search queries
    pub const RECENT_SEARCHES: &str = "recent_searches";
    /// Most-recent-first list of viewed businesses
    pub const RECENTLY_VIEWED: &str = "recently_viewed";
}

/// Defaults applied when the environment does not override them
pub mod defaults {
    /// Backend base URL
    pub const API_BASE_URL: &str = "http://localhost:8000/api";
    /// Proximity radius in kilometers
    pub const RADIUS_KM: f64 = 10.0;
    /// Maximum entries kept per history list
    pub const RECENT_LIMIT: usize = 10;
    /// HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// HTTP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Directory under the platform data dir holding the file store
    pub const STORAGE_DIR: &str = "yellowpages";
    /// File name of the file store
    pub const STORAGE_FILE: &str = "storage.json";
}

/// Service names for structured logging
pub mod service_names {
    /// Command-line client
    pub const YP_CLI: &str = "yp-cli";
    /// Directory backend, as named in error messages
    pub const DIRECTORY_BACKEND: &str = "Directory API";
}
