// ABOUTME: Proximity filtering of locatable entities around a reference location
// ABOUTME: Annotates with haversine distance, filters by radius, ranks nearest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use tracing::debug;
use yp_core::errors::GeoError;
use yp_core::models::{Coordinate, DistanceAnnotated, LocatableEntity};

use crate::geo::haversine_km_unchecked;

/// Keep the entities within `radius_km` of `origin`, nearest first
///
/// Entities without a recorded position, or with an invalid one, are
/// skipped: missing GPS data is expected and is not an error. The radius is
/// inclusive, so an entity exactly on the boundary is kept. Ties in distance
/// keep their input order. A negative or NaN radius yields nothing.
///
/// Pass `&entities` to annotate borrowed entities without cloning.
///
/// # Errors
///
/// Returns `GeoError::InvalidOrigin` if `origin` is not a valid coordinate
pub fn filter_by_proximity<I, E>(
    entities: I,
    origin: Coordinate,
    radius_km: f64,
) -> Result<Vec<DistanceAnnotated<E>>, GeoError>
where
    I: IntoIterator<Item = E>,
    E: LocatableEntity,
{
    if !origin.is_valid() {
        return Err(GeoError::invalid_origin(origin.latitude, origin.longitude));
    }

    let mut skipped = 0_usize;
    let mut within: Vec<DistanceAnnotated<E>> = entities
        .into_iter()
        .filter_map(|entity| {
            let Some(position) = entity.coordinate().filter(Coordinate::is_valid) else {
                skipped += 1;
                return None;
            };
            let distance_km = haversine_km_unchecked(origin, position);
            (distance_km <= radius_km).then_some(DistanceAnnotated {
                entity,
                distance_km,
            })
        })
        .collect();

    // sort_by is stable: equal distances keep input order
    within.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    debug!(
        origin = %origin,
        radius_km,
        matched = within.len(),
        skipped_without_gps = skipped,
        "Proximity filter applied"
    );

    Ok(within)
}

/// Pair every entity with its distance from `origin`, in input order
///
/// Used for unfiltered listings: entities without a usable position, or all
/// entities when `origin` itself is invalid, get `None` ("distance unknown").
#[must_use]
pub fn annotate_distances<I, E>(entities: I, origin: Coordinate) -> Vec<(E, Option<f64>)>
where
    I: IntoIterator<Item = E>,
    E: LocatableEntity,
{
    let origin_valid = origin.is_valid();
    entities
        .into_iter()
        .map(|entity| {
            let distance = entity
                .coordinate()
                .filter(|position| origin_valid && position.is_valid())
                .map(|position| haversine_km_unchecked(origin, position));
            (entity, distance)
        })
        .collect()
}
