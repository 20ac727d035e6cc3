// ABOUTME: Geographic coordinate value type and locatable-entity abstraction
// ABOUTME: Validation of latitude/longitude ranges and distance-annotated results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use crate::constants::geo::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::errors::{AppError, GeoError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Check that a latitude/longitude pair is finite and within range.
///
/// Both components must be valid; a coordinate is never partially valid.
#[must_use]
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
        && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}

/// A latitude/longitude pair in decimal degrees
///
/// `new` does not validate so that callers can carry raw device or backend
/// readings; use [`Coordinate::try_new`] or [`Coordinate::is_valid`] before
/// handing a value to code that requires a valid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, valid range -90 to 90
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Longitude in degrees, valid range -180 to 180
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate without validation
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a coordinate, rejecting out-of-range or non-finite components
    ///
    /// # Errors
    ///
    /// Returns `GeoError::InvalidCoordinate` if either component is invalid
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if is_valid_coordinate(latitude, longitude) {
            Ok(Self::new(latitude, longitude))
        } else {
            Err(GeoError::invalid_coordinate(latitude, longitude))
        }
    }

    /// Whether both components are finite and in range
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_coordinate(self.latitude, self.longitude)
    }

    /// Return the coordinate if valid, otherwise an `InvalidCoordinate` error
    ///
    /// # Errors
    ///
    /// Returns `GeoError::InvalidCoordinate` if either component is invalid
    pub fn validated(self) -> Result<Self, GeoError> {
        Self::try_new(self.latitude, self.longitude)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Parses `"lat,lon"`, the format used on the command line and in URLs
impl FromStr for Coordinate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| AppError::invalid_input(format!("Expected 'lat,lon', got '{s}'")))?;

        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input(format!("Invalid latitude '{lat}'")))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input(format!("Invalid longitude '{lon}'")))?;

        Ok(Self::new(latitude, longitude))
    }
}

/// A record that may carry a recorded GPS position
///
/// Entities whose coordinate is absent are kept in unfiltered listings but
/// take no part in proximity computations.
pub trait LocatableEntity {
    /// Identifier type of the entity
    type Id: Clone + fmt::Debug;

    /// Identifier of the entity
    fn id(&self) -> &Self::Id;

    /// Recorded position, if any
    fn coordinate(&self) -> Option<Coordinate>;
}

impl<T: LocatableEntity> LocatableEntity for &T {
    type Id = T::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }

    fn coordinate(&self) -> Option<Coordinate> {
        (**self).coordinate()
    }
}

/// An entity paired with its distance from a reference location
///
/// Produced transiently by the proximity filter; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceAnnotated<T> {
    /// The annotated entity
    #[serde(flatten)]
    pub entity: T,
    /// Great-circle distance from the reference location in kilometers
    pub distance_km: f64,
}
