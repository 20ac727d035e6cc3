// ABOUTME: Subscription plan, business limit and limit evaluation models
// ABOUTME: Preserves the backend's -1 "unlimited" sentinel on the wire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use crate::constants::subscription::UNLIMITED_SENTINEL;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Maximum number of businesses a plan lets a user own
///
/// Serialized as an integer: a positive count, or `-1` for unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessLimit {
    /// At most this many businesses (always positive)
    Limited(u32),
    /// No cap
    Unlimited,
}

impl BusinessLimit {
    /// Decode the backend's integer representation
    ///
    /// Returns `None` for zero or for negative values other than the sentinel.
    #[must_use]
    pub fn from_wire(value: i64) -> Option<Self> {
        if value == UNLIMITED_SENTINEL {
            return Some(Self::Unlimited);
        }
        u32::try_from(value)
            .ok()
            .filter(|limit| *limit > 0)
            .map(Self::Limited)
    }

    /// Encode to the backend's integer representation
    #[must_use]
    pub fn to_wire(self) -> i64 {
        match self {
            Self::Limited(limit) => i64::from(limit),
            Self::Unlimited => UNLIMITED_SENTINEL,
        }
    }
}

impl Display for BusinessLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(limit) => write!(f, "{limit}"),
            Self::Unlimited => write!(f, "unlimited"),
        }
    }
}

impl Serialize for BusinessLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.to_wire())
    }
}

impl<'de> Deserialize<'de> for BusinessLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Self::from_wire(value).ok_or_else(|| {
            de::Error::invalid_value(
                de::Unexpected::Signed(value),
                &"a positive business limit or -1 for unlimited",
            )
        })
    }
}

/// A subscription plan offered by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    /// Backend identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Plan name
    pub name: String,
    /// Price per billing period
    pub price: f64,
    /// Business ownership cap
    pub business_limit: BusinessLimit,
    /// Human-readable feature list
    #[serde(default)]
    pub features: Vec<String>,
}

impl SubscriptionPlan {
    /// Create a plan with no id or features
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, business_limit: BusinessLimit) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            business_limit,
            features: Vec::new(),
        }
    }
}

/// The user's current subscription as reported by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSubscription {
    /// Active plan, `None` when the user is on the free tier
    #[serde(default)]
    pub plan: Option<SubscriptionPlan>,
}

/// A count that may be unbounded
///
/// Serialized as a number, or as the string `"unlimited"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quota {
    /// A finite count
    Limited(u64),
    /// No bound
    Unlimited,
}

impl Display for Quota {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(count) => write!(f, "{count}"),
            Self::Unlimited => write!(f, "unlimited"),
        }
    }
}

impl Serialize for Quota {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Limited(count) => serializer.serialize_u64(*count),
            Self::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

impl<'de> Deserialize<'de> for Quota {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(count) => Ok(Self::Limited(count)),
            Raw::Text(text) if text == "unlimited" => Ok(Self::Unlimited),
            Raw::Text(text) => Err(de::Error::invalid_value(
                de::Unexpected::Str(&text),
                &"a count or \"unlimited\"",
            )),
        }
    }
}

/// Outcome of checking a user's plan against their owned business count
///
/// Derived on every read and never stored; recompute after any business is
/// created or deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitEvaluation {
    /// Businesses the plan permits
    pub current_limit: Quota,
    /// Businesses the user already owns
    pub used_count: u64,
    /// Further businesses the user may create, never negative
    pub remaining_slots: Quota,
    /// Whether one more business may be created
    pub can_create: bool,
}

/// Whether the UI should nudge the user towards a larger plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradePrompt {
    /// Plenty of room, or unlimited
    None,
    /// Exactly one slot left on a multi-business plan
    ApproachingLimit,
    /// No slot left; creation is blocked
    LimitReached,
}
