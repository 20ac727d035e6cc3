// ABOUTME: Distance and navigation commands for yp-cli
// ABOUTME: Computes great-circle distances and prints directions links
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use tracing::info;
use yellowpages::intelligence::{
    build_navigation_url, format_distance, haversine_distance_km, NavigationProvider,
};
use yellowpages::models::{BusinessId, Coordinate};
use yellowpages::services::navigation_url_for;

use super::Context;
use crate::helpers::display::{print_json, print_line};

/// Print the distance between two coordinates
pub fn distance(ctx: &Context, from: Coordinate, to: Coordinate) -> Result<()> {
    let km = haversine_distance_km(from, to)?;
    if ctx.json {
        return print_json(&json!({
            "from": from,
            "to": to,
            "distance_km": km,
            "formatted": format_distance(km),
        }));
    }
    print_line(&format!("{} ({km:.3} km)", format_distance(km)));
    Ok(())
}

/// Print a directions link to a coordinate
pub fn navigate_to(ctx: &Context, to: Coordinate, provider: NavigationProvider) -> Result<()> {
    let url = build_navigation_url(to, provider)?;
    print_url(ctx, &url)
}

/// Print a directions link to a business and remember that it was viewed
pub async fn navigate_to_business(
    ctx: &Context,
    id: BusinessId,
    provider: NavigationProvider,
    file: Option<&Path>,
) -> Result<()> {
    let service = ctx.directory(file).await?;
    let business = service.business(id).await?;
    let url = navigation_url_for(&business, provider)?;

    ctx.history().await?.record_view(&business).await?;
    info!(business_id = id, %provider, "Navigation link built");

    print_url(ctx, &url)
}

fn print_url(ctx: &Context, url: &str) -> Result<()> {
    if ctx.json {
        return print_json(&json!({ "url": url }));
    }
    print_line(url);
    Ok(())
}
