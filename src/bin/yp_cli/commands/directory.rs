// ABOUTME: Nearby search and listing commands for yp-cli
// ABOUTME: Radius search records the query in browsing history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use std::path::Path;

use anyhow::Result;
use yellowpages::models::Coordinate;

use super::Context;
use crate::helpers::display::{display_listing, display_nearby, print_json};

/// Businesses within `radius` of `origin`, optionally narrowed by a text query
pub async fn nearby(
    ctx: &Context,
    origin: Coordinate,
    radius: Option<f64>,
    query: Option<&str>,
    file: Option<&Path>,
) -> Result<()> {
    let radius_km = radius.unwrap_or(ctx.config.default_radius_km);
    let service = ctx.directory(file).await?;
    let mut hits = service.nearby_businesses(origin, radius_km).await?;

    if let Some(query) = query {
        hits.retain(|hit| hit.entity.matches_query(query));
        ctx.history().await?.record_search(query).await?;
    }

    if ctx.json {
        return print_json(&hits);
    }
    display_nearby(&hits, radius_km);
    Ok(())
}

/// Every business in backend order
pub async fn list(ctx: &Context, origin: Option<Coordinate>, file: Option<&Path>) -> Result<()> {
    let service = ctx.directory(file).await?;
    let entries = service.listing(origin).await?;

    if ctx.json {
        return print_json(&entries);
    }
    display_listing(&entries);
    Ok(())
}
