// ABOUTME: Directory backend provider abstraction and REST implementation
// ABOUTME: Fetches businesses and subscription data consumed by the pure logic crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

#![deny(unsafe_code)]

//! Backend providers for the Yellow Pages directory.
//!
//! The REST backend that stores businesses, reviews and subscriptions is an
//! external collaborator. This crate describes the part of its interface the
//! directory consumes (`DirectoryProvider`) and implements it over HTTP, plus an
//! in-memory implementation for offline data.

// Re-export yp-core modules so providers can keep `use crate::errors::*` etc.
pub use yp_core::constants;
pub use yp_core::errors;
pub use yp_core::models;

/// Core provider trait
pub mod core;
/// `reqwest`-backed REST provider
pub mod rest;
/// In-memory provider for offline data and tests
pub mod synthetic;

pub use self::core::DirectoryProvider;
pub use rest::{RestDirectoryProvider, RestProviderConfig};
pub use synthetic::SyntheticDirectoryProvider;
