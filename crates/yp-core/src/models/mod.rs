// ABOUTME: Core data models for the Yellow Pages directory
// ABOUTME: Re-exports coordinate, business and subscription types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

/// Business listing model
pub mod business;
/// Coordinates, locatable entities and distance annotations
pub mod coordinate;
/// Subscription plans and limit evaluations
pub mod subscription;

pub use business::{Business, BusinessId};
pub use coordinate::{is_valid_coordinate, Coordinate, DistanceAnnotated, LocatableEntity};
pub use subscription::{
    BusinessLimit, LimitEvaluation, Quota, SubscriptionPlan, UpgradePrompt, UserSubscription,
};
