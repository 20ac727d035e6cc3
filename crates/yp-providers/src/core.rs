// ABOUTME: Provider trait describing the directory backend as consumed by the client
// ABOUTME: Async interface over businesses, owned businesses and subscriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{Business, BusinessId, SubscriptionPlan, UserSubscription};

/// Read access to the directory backend
///
/// Implementations must be shareable across tasks. Authenticated calls take
/// the caller's bearer token explicitly so that the token store stays
/// outside the provider.
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    /// Provider name for logging and error messages
    fn name(&self) -> &'static str;

    /// All public business listings
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or the payload is malformed
    async fn list_businesses(&self) -> AppResult<Vec<Business>>;

    /// A single business listing
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no business has this id
    async fn get_business(&self, id: BusinessId) -> AppResult<Business>;

    /// Businesses owned by the token's user
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` if the backend rejects the token
    async fn my_businesses(&self, token: &str) -> AppResult<Vec<Business>>;

    /// Subscription plans on offer
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or the payload is malformed
    async fn list_plans(&self) -> AppResult<Vec<SubscriptionPlan>>;

    /// The token user's active subscription; a missing subscription is the free tier
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` if the backend rejects the token
    async fn my_subscription(&self, token: &str) -> AppResult<UserSubscription>;
}

#[async_trait]
impl<P: DirectoryProvider + ?Sized> DirectoryProvider for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn list_businesses(&self) -> AppResult<Vec<Business>> {
        (**self).list_businesses().await
    }

    async fn get_business(&self, id: BusinessId) -> AppResult<Business> {
        (**self).get_business(id).await
    }

    async fn my_businesses(&self, token: &str) -> AppResult<Vec<Business>> {
        (**self).my_businesses(token).await
    }

    async fn list_plans(&self) -> AppResult<Vec<SubscriptionPlan>> {
        (**self).list_plans().await
    }

    async fn my_subscription(&self, token: &str) -> AppResult<UserSubscription> {
        (**self).my_subscription(token).await
    }
}
