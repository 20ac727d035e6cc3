// ABOUTME: Integration tests for radius filtering and distance ranking of businesses
// ABOUTME: Covers boundary inclusivity, missing GPS exclusion, ordering and invalid origins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{business_at, kinshasa_businesses, GOMBE};
use yellowpages::errors::{AppError, ErrorCode, GeoError};
use yellowpages::intelligence::{annotate_distances, filter_by_proximity, haversine_distance_km};
use yellowpages::models::{Business, BusinessId, Coordinate};

fn ids(hits: &[yellowpages::models::DistanceAnnotated<&Business>]) -> Vec<BusinessId> {
    hits.iter().map(|hit| hit.entity.id).collect()
}

#[test]
fn test_entity_exactly_on_radius_is_included() {
    let shop = business_at(1, "Edge", -4.3300, 15.2600);
    let radius = haversine_distance_km(GOMBE, Coordinate::new(-4.3300, 15.2600)).unwrap();

    let businesses = vec![shop];
    let hits = filter_by_proximity(&businesses, GOMBE, radius).unwrap();
    assert_eq!(ids(&hits), vec![1]);
    assert_eq!(hits[0].distance_km.to_bits(), radius.to_bits());
}

#[test]
fn test_missing_gps_is_excluded_not_an_error() {
    let businesses = vec![
        Business::new(1, "No GPS"),
        business_at(2, "Nearby", -4.3040, 15.3120),
    ];
    let hits = filter_by_proximity(&businesses, GOMBE, 5.0).unwrap();
    assert_eq!(ids(&hits), vec![2]);
}

#[test]
fn test_results_sorted_nearest_first() {
    // Roughly 5 km, 1 km and 3 km south of the origin
    let origin = Coordinate::new(0.0, 0.0);
    let businesses = vec![
        business_at(5, "Five", -0.045, 0.0),
        business_at(1, "One", -0.009, 0.0),
        business_at(3, "Three", -0.027, 0.0),
    ];
    let hits = filter_by_proximity(&businesses, origin, 10.0).unwrap();
    assert_eq!(ids(&hits), vec![1, 3, 5]);
    assert!(hits.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
}

#[test]
fn test_kinshasa_fixture_within_ten_km() {
    let businesses = kinshasa_businesses();
    let hits = filter_by_proximity(&businesses, GOMBE, 10.0).unwrap();

    // Lubumbashi is too far, #2 has no GPS and #5 has an impossible latitude
    assert_eq!(ids(&hits), vec![1, 6, 3]);
    assert!(hits.iter().all(|hit| hit.distance_km <= 10.0));
}

#[test]
fn test_empty_input_yields_empty_output() {
    let businesses: Vec<Business> = Vec::new();
    assert!(filter_by_proximity(&businesses, GOMBE, 50.0)
        .unwrap()
        .is_empty());
}

#[test]
fn test_invalid_origin_fails_even_with_no_entities() {
    let businesses: Vec<Business> = Vec::new();
    let err = filter_by_proximity(&businesses, Coordinate::new(-95.0, 0.0), 50.0).unwrap_err();
    assert_eq!(err, GeoError::invalid_origin(-95.0, 0.0));

    let app_error: AppError = err.into();
    assert_eq!(app_error.code, ErrorCode::InvalidOrigin);
}

#[test]
fn test_owned_input_is_consumed_into_annotations() {
    let hits = filter_by_proximity(kinshasa_businesses(), GOMBE, 2.0).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entity.name, "Pharmacie Gombe");
}

#[test]
fn test_annotated_result_serializes_flat() {
    let businesses = vec![business_at(1, "Pharmacie Gombe", -4.3050, 15.3120)];
    let hits = filter_by_proximity(businesses, GOMBE, 5.0).unwrap();
    let json = serde_json::to_value(&hits[0]).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Pharmacie Gombe");
    assert!(json["distance_km"].as_f64().unwrap() < 1.0);
}

#[test]
fn test_unfiltered_listing_marks_unknown_distances() {
    let businesses = kinshasa_businesses();
    let annotated = annotate_distances(&businesses, GOMBE);

    assert_eq!(annotated.len(), businesses.len());
    let unknown: Vec<BusinessId> = annotated
        .iter()
        .filter(|(_, distance)| distance.is_none())
        .map(|(business, _)| business.id)
        .collect();
    assert_eq!(unknown, vec![2, 5]);
}
