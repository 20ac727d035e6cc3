// ABOUTME: Business listing model as returned by the directory backend
// ABOUTME: GPS position is optional and only present when both components are recorded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use super::coordinate::{Coordinate, LocatableEntity};
use serde::{Deserialize, Serialize};

/// Business identifier assigned by the backend
pub type BusinessId = u64;

/// A business listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Backend identifier
    pub id: BusinessId,
    /// Display name
    pub name: String,
    /// Category name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Recorded latitude
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Recorded longitude
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Mean review rating, absent when the business has no reviews
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

impl Business {
    /// Create a business with only the required fields set
    #[must_use]
    pub fn new(id: BusinessId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            address: None,
            city: None,
            phone: None,
            latitude: None,
            longitude: None,
            average_rating: None,
        }
    }

    /// Set the recorded GPS position
    #[must_use]
    pub const fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Case-insensitive match of `query` against name, category and city
    ///
    /// A blank query matches everything.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [Some(&self.name), self.category.as_ref(), self.city.as_ref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

impl LocatableEntity for Business {
    type Id = BusinessId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        }
    }
}
