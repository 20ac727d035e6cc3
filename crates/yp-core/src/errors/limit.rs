// ABOUTME: Subscription limit error types
// ABOUTME: Raised when a limit evaluation receives a negative resource count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use super::{AppError, ErrorCode};

/// Errors raised by the subscription limit policy
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LimitError {
    /// The owned-resource count was negative
    #[error("Owned business count must not be negative, got {count}")]
    InvalidCount {
        /// Supplied count
        count: i64,
    },
}

impl From<LimitError> for AppError {
    fn from(error: LimitError) -> Self {
        Self::new(ErrorCode::InvalidCount, error.to_string()).with_source(error)
    }
}
