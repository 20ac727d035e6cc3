// ABOUTME: Haversine great-circle distance and related coordinate utilities
// ABOUTME: Distance formatting and provider-specific map navigation URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yp_core::constants::geo::{EARTH_RADIUS_KM, METERS_PER_KM};
use yp_core::constants::navigation::{
    APPLE_DIRECTIONS_URL, GOOGLE_DIRECTIONS_URL, OSM_DIRECTIONS_URL,
};
use yp_core::errors::{AppError, GeoError};
use yp_core::models::Coordinate;

pub use yp_core::models::is_valid_coordinate;

/// Great-circle distance between two coordinates in kilometers
///
/// Uses the haversine formula with a spherical Earth of radius 6371 km. The
/// result is symmetric in its arguments and exactly `0.0` for identical
/// points.
///
/// # Errors
///
/// Returns `GeoError::InvalidCoordinate` if either coordinate is invalid
pub fn haversine_distance_km(a: Coordinate, b: Coordinate) -> Result<f64, GeoError> {
    let a = a.validated()?;
    let b = b.validated()?;
    Ok(haversine_km_unchecked(a, b))
}

/// Haversine kernel for coordinates the caller has already validated
#[allow(clippy::suboptimal_flops)] // Textbook form keeps the result symmetric in a and b
pub(crate) fn haversine_km_unchecked(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    // Rounding can push h marginally past 1 for antipodal points
    let h = ((d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Render a distance for display
///
/// Below one kilometer the distance is shown in whole meters (`"850 m"`),
/// otherwise in kilometers with one decimal (`"12.4 km"`).
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * METERS_PER_KM).round())
    } else {
        format!("{km:.1} km")
    }
}

/// External map application used for turn-by-turn navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationProvider {
    /// Google Maps
    #[default]
    Google,
    /// Apple Maps
    Apple,
    /// `OpenStreetMap`
    Osm,
}

impl NavigationProvider {
    /// Directions URL prefix, completed by appending `lat,lon`
    #[must_use]
    pub const fn directions_prefix(self) -> &'static str {
        match self {
            Self::Google => GOOGLE_DIRECTIONS_URL,
            Self::Apple => APPLE_DIRECTIONS_URL,
            Self::Osm => OSM_DIRECTIONS_URL,
        }
    }

    /// Parse from string with fallback to Google
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl Display for NavigationProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Google => write!(f, "google"),
            Self::Apple => write!(f, "apple"),
            Self::Osm => write!(f, "osm"),
        }
    }
}

impl FromStr for NavigationProvider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" | "gmaps" => Ok(Self::Google),
            "apple" => Ok(Self::Apple),
            "osm" | "openstreetmap" => Ok(Self::Osm),
            other => Err(AppError::invalid_input(format!(
                "Unknown navigation provider '{other}'"
            ))),
        }
    }
}

/// Build the external navigation URL for a destination
///
/// Pure string construction; no request is made.
///
/// # Errors
///
/// Returns `GeoError::InvalidCoordinate` if `dest` is invalid
pub fn build_navigation_url(
    dest: Coordinate,
    provider: NavigationProvider,
) -> Result<String, GeoError> {
    let dest = dest.validated()?;
    Ok(format!(
        "{}{},{}",
        provider.directions_prefix(),
        dest.latitude,
        dest.longitude
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINSHASA: Coordinate = Coordinate::new(-4.4419, 15.2663);
    const LUBUMBASHI: Coordinate = Coordinate::new(-11.6609, 27.4794);

    #[test]
    fn test_known_distance_kinshasa_lubumbashi() {
        let distance = haversine_distance_km(KINSHASA, LUBUMBASHI).unwrap();
        // Haversine with R = 6371 km gives about 1565.2 km for this pair
        assert!(
            (1560.0..=1570.0).contains(&distance),
            "unexpected distance {distance}"
        );
    }

    #[test]
    fn test_identical_points_are_exactly_zero() {
        let distance = haversine_distance_km(KINSHASA, KINSHASA).unwrap();
        assert_eq!(distance.to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn test_antipodal_points_do_not_produce_nan() {
        let distance =
            haversine_distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0)).unwrap();
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_coordinate_is_rejected() {
        let err = haversine_distance_km(KINSHASA, Coordinate::new(95.0, 0.0)).unwrap_err();
        assert_eq!(err, GeoError::invalid_coordinate(95.0, 0.0));
    }

    #[test]
    fn test_format_distance_switches_units_at_one_km() {
        assert_eq!(format_distance(0.999), "999 m");
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(0.2504), "250 m");
        assert_eq!(format_distance(1.0), "1.0 km");
        assert_eq!(format_distance(12.345), "12.3 km");
    }

    #[test]
    fn test_navigation_urls_per_provider() {
        let dest = Coordinate::new(-4.3, 15.3);
        assert_eq!(
            build_navigation_url(dest, NavigationProvider::default()).unwrap(),
            "https://www.google.com/maps/dir/?api=1&destination=-4.3,15.3"
        );
        assert_eq!(
            build_navigation_url(dest, NavigationProvider::Apple).unwrap(),
            "https://maps.apple.com/?daddr=-4.3,15.3"
        );
        assert_eq!(
            build_navigation_url(dest, NavigationProvider::Osm).unwrap(),
            "https://www.openstreetmap.org/directions?to=-4.3,15.3"
        );
    }

    #[test]
    fn test_navigation_url_rejects_invalid_destination() {
        let result = build_navigation_url(Coordinate::new(f64::NAN, 15.3), NavigationProvider::Osm);
        assert!(matches!(result, Err(GeoError::InvalidCoordinate { .. })));
    }

    #[test]
    fn test_provider_parsing() {
        assert_eq!(
            NavigationProvider::from_str_or_default("Apple"),
            NavigationProvider::Apple
        );
        assert_eq!(
            NavigationProvider::from_str_or_default("openstreetmap"),
            NavigationProvider::Osm
        );
        assert_eq!(
            NavigationProvider::from_str_or_default("waze"),
            NavigationProvider::Google
        );
    }
}
