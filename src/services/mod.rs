// ABOUTME: Service layer composing the backend provider with proximity and limit policy
// ABOUTME: Every command and screen goes through these services instead of raw provider calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

//! Domain service layer
//!
//! Services own no state beyond the provider they wrap. Policy decisions
//! (radius filtering, business quotas) are delegated to `yp-intelligence` so
//! there is exactly one place each rule is implemented.

/// Directory browsing, business quotas and navigation
pub mod directory;

pub use directory::{navigation_url_for, CreationAllowance, DirectoryService, ListingEntry};
