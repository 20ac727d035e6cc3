// ABOUTME: Directory service: nearby search, listings, business quota and navigation links
// ABOUTME: Generic over DirectoryProvider so tests inject an in-memory backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use serde::Serialize;
use tracing::{info, instrument};
use yp_intelligence::{
    annotate_distances, build_navigation_url, evaluate_limit, filter_by_proximity,
    upgrade_prompt, NavigationProvider,
};
use yp_providers::DirectoryProvider;

use crate::errors::{AppError, AppResult, GeoError};
use crate::models::{
    Business, BusinessId, Coordinate, DistanceAnnotated, LimitEvaluation, LocatableEntity,
    SubscriptionPlan, UpgradePrompt,
};

/// A business in an unfiltered listing
#[derive(Debug, Clone, Serialize)]
pub struct ListingEntry {
    /// The business
    #[serde(flatten)]
    pub business: Business,
    /// Distance from the user, `None` when either position is unknown
    pub distance_km: Option<f64>,
}

/// Answer to "may this user add another business?"
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CreationAllowance {
    /// Quota evaluation for the user's plan
    pub evaluation: LimitEvaluation,
    /// Which upgrade prompt, if any, to show
    pub prompt: UpgradePrompt,
}

/// Business directory operations over a provider
#[derive(Debug, Clone)]
pub struct DirectoryService<P> {
    provider: P,
}

impl<P: DirectoryProvider> DirectoryService<P> {
    /// Wrap a provider
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The wrapped provider
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Businesses within `radius_km` of `origin`, nearest first
    ///
    /// The origin is validated before anything is fetched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOrigin` for an invalid origin, or the provider's error
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn nearby_businesses(
        &self,
        origin: Coordinate,
        radius_km: f64,
    ) -> AppResult<Vec<DistanceAnnotated<Business>>> {
        if !origin.is_valid() {
            return Err(GeoError::invalid_origin(origin.latitude, origin.longitude).into());
        }

        let businesses = self.provider.list_businesses().await?;
        let total = businesses.len();
        let nearby = filter_by_proximity(businesses, origin, radius_km)?;

        info!(total, nearby = nearby.len(), "Nearby search completed");
        Ok(nearby)
    }

    /// Every business in backend order, with distance when `origin` is known
    ///
    /// # Errors
    ///
    /// Returns the provider's error
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn listing(&self, origin: Option<Coordinate>) -> AppResult<Vec<ListingEntry>> {
        let businesses = self.provider.list_businesses().await?;

        let entries = match origin {
            Some(origin) => annotate_distances(businesses, origin)
                .into_iter()
                .map(|(business, distance_km)| ListingEntry {
                    business,
                    distance_km,
                })
                .collect(),
            None => businesses
                .into_iter()
                .map(|business| ListingEntry {
                    business,
                    distance_km: None,
                })
                .collect(),
        };
        Ok(entries)
    }

    /// A single business
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or the provider's error
    pub async fn business(&self, id: BusinessId) -> AppResult<Business> {
        self.provider.get_business(id).await
    }

    /// Plans the user can subscribe to
    ///
    /// # Errors
    ///
    /// Returns the provider's error
    pub async fn plans(&self) -> AppResult<Vec<SubscriptionPlan>> {
        self.provider.list_plans().await
    }

    /// Evaluate whether the signed-in user may create another business
    ///
    /// Fetches the subscription and the owned businesses concurrently.
    ///
    /// # Errors
    ///
    /// Returns the provider's error, e.g. `AuthInvalid` for a rejected token
    #[instrument(skip(self, token), fields(provider = self.provider.name()))]
    pub async fn creation_allowance(&self, token: &str) -> AppResult<CreationAllowance> {
        let (subscription, owned) = tokio::try_join!(
            self.provider.my_subscription(token),
            self.provider.my_businesses(token),
        )?;

        let used = i64::try_from(owned.len())
            .map_err(|_| AppError::internal("Owned business count overflows i64"))?;
        let evaluation = evaluate_limit(subscription.plan.as_ref(), used)?;
        let prompt = upgrade_prompt(&evaluation);

        info!(
            used = evaluation.used_count,
            limit = %evaluation.current_limit,
            can_create = evaluation.can_create,
            "Evaluated business creation"
        );
        Ok(CreationAllowance { evaluation, prompt })
    }

    /// Directions link to a business
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if the business has no usable position,
    /// or the provider's error
    pub async fn navigation_url(
        &self,
        business_id: BusinessId,
        provider: NavigationProvider,
    ) -> AppResult<String> {
        let business = self.provider.get_business(business_id).await?;
        Ok(navigation_url_for(&business, provider)?)
    }
}

/// Directions link to an already-fetched business
///
/// # Errors
///
/// Returns `GeoError::InvalidCoordinate` if the business has no usable position
pub fn navigation_url_for(
    business: &Business,
    provider: NavigationProvider,
) -> Result<String, GeoError> {
    let destination = business.coordinate().ok_or_else(|| {
        GeoError::invalid_coordinate(
            business.latitude.unwrap_or(f64::NAN),
            business.longitude.unwrap_or(f64::NAN),
        )
    })?;
    build_navigation_url(destination, provider)
}
