// ABOUTME: Core types and constants for the Yellow Pages directory
// ABOUTME: Foundation crate with error handling, domain models and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

#![deny(unsafe_code)]

//! # Yellow Pages Core
//!
//! Foundation crate providing shared types and constants for the directory.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Coordinates, businesses, subscription plans and limit evaluations

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Coordinate, Business, SubscriptionPlan, etc.)
pub mod models;
