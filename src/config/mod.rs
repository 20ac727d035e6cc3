// ABOUTME: Configuration module for the directory client
// ABOUTME: Environment-only configuration with typed enums and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

/// Environment and client configuration
pub mod environment;

pub use environment::{DirectoryConfig, Environment};
