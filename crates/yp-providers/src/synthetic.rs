// ABOUTME: In-memory directory provider for offline use, demos and tests
// ABOUTME: Serves pre-loaded businesses, plans and a subscription without any network access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

//! # Synthetic Directory Provider
//!
//! Behaves like the REST backend, including authentication failures, but
//! serves data loaded up front. The CLI uses it for `--file` input; the test
//! suites use it to drive the service layer deterministically.

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::core::DirectoryProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{Business, BusinessId, SubscriptionPlan, UserSubscription};

/// Provider name reported by `DirectoryProvider::name`
pub const SYNTHETIC_PROVIDER_NAME: &str = "synthetic";

/// Pre-loaded directory data
#[derive(Debug, Default)]
pub struct SyntheticDirectoryProvider {
    businesses: RwLock<Vec<Business>>,
    owned: Vec<Business>,
    plans: Vec<SubscriptionPlan>,
    subscription: Option<SubscriptionPlan>,
    accepted_token: Option<String>,
}

impl SyntheticDirectoryProvider {
    /// Provider serving `businesses` to everyone
    #[must_use]
    pub fn with_businesses(businesses: Vec<Business>) -> Self {
        Self {
            businesses: RwLock::new(businesses),
            ..Self::default()
        }
    }

    /// Businesses owned by the signed-in user
    #[must_use]
    pub fn with_owned(mut self, owned: Vec<Business>) -> Self {
        self.owned = owned;
        self
    }

    /// Plans offered for subscription
    #[must_use]
    pub fn with_plans(mut self, plans: Vec<SubscriptionPlan>) -> Self {
        self.plans = plans;
        self
    }

    /// Active plan of the signed-in user; without one the user is on the free tier
    #[must_use]
    pub fn with_subscription(mut self, plan: SubscriptionPlan) -> Self {
        self.subscription = Some(plan);
        self
    }

    /// Only accept this bearer token on authenticated calls
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.accepted_token = Some(token.into());
        self
    }

    /// Add a business after construction
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the lock is poisoned
    pub fn add_business(&self, business: Business) -> AppResult<()> {
        self.businesses
            .write()
            .map_err(|e| AppError::internal(format!("Business lock poisoned: {e}")))?
            .push(business);
        Ok(())
    }

    fn check_token(&self, token: &str) -> AppResult<()> {
        match &self.accepted_token {
            Some(accepted) if accepted != token => {
                Err(AppError::auth_invalid("Token not recognised"))
            }
            _ => Ok(()),
        }
    }

    fn snapshot(&self) -> AppResult<Vec<Business>> {
        Ok(self
            .businesses
            .read()
            .map_err(|e| AppError::internal(format!("Business lock poisoned: {e}")))?
            .clone())
    }
}

#[async_trait]
impl DirectoryProvider for SyntheticDirectoryProvider {
    fn name(&self) -> &'static str {
        SYNTHETIC_PROVIDER_NAME
    }

    async fn list_businesses(&self) -> AppResult<Vec<Business>> {
        let businesses = self.snapshot()?;
        debug!(count = businesses.len(), "Serving synthetic businesses");
        Ok(businesses)
    }

    async fn get_business(&self, id: BusinessId) -> AppResult<Business> {
        self.snapshot()?
            .into_iter()
            .find(|business| business.id == id)
            .ok_or_else(|| {
                AppError::not_found(format!("Business {id}")).with_resource_id(id.to_string())
            })
    }

    async fn my_businesses(&self, token: &str) -> AppResult<Vec<Business>> {
        self.check_token(token)?;
        Ok(self.owned.clone())
    }

    async fn list_plans(&self) -> AppResult<Vec<SubscriptionPlan>> {
        Ok(self.plans.clone())
    }

    async fn my_subscription(&self, token: &str) -> AppResult<UserSubscription> {
        self.check_token(token)?;
        Ok(UserSubscription {
            plan: self.subscription.clone(),
        })
    }
}
