// ABOUTME: Coordinate and proximity error types for geo computations
// ABOUTME: Separates invalid coordinates from an invalid proximity reference location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use super::{AppError, ErrorCode};

/// Contract violations raised by the geo functions.
///
/// Missing or invalid GPS data on an individual business is not an error;
/// these variants only cover values the caller was required to validate.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// A coordinate required to be valid was out of range or non-finite
    #[error("Invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// Supplied latitude
        latitude: f64,
        /// Supplied longitude
        longitude: f64,
    },

    /// The reference location of a proximity query was invalid
    #[error("Invalid proximity origin ({latitude}, {longitude})")]
    InvalidOrigin {
        /// Supplied latitude
        latitude: f64,
        /// Supplied longitude
        longitude: f64,
    },
}

impl GeoError {
    /// Create an "invalid coordinate" error
    #[must_use]
    pub const fn invalid_coordinate(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinate {
            latitude,
            longitude,
        }
    }

    /// Create an "invalid origin" error
    #[must_use]
    pub const fn invalid_origin(latitude: f64, longitude: f64) -> Self {
        Self::InvalidOrigin {
            latitude,
            longitude,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidCoordinate { .. } => ErrorCode::InvalidCoordinate,
            Self::InvalidOrigin { .. } => ErrorCode::InvalidOrigin,
        }
    }
}

impl From<GeoError> for AppError {
    fn from(error: GeoError) -> Self {
        Self::new(error.code(), error.to_string()).with_source(error)
    }
}
