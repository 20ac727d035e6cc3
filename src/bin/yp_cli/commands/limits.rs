// ABOUTME: Subscription quota commands for yp-cli
// ABOUTME: Offline limit evaluation, plan listing and the signed-in user's allowance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use std::path::Path;

use anyhow::{Context as _, Result};
use serde_json::json;
use yellowpages::intelligence::{evaluate_limit, upgrade_prompt};
use yellowpages::models::SubscriptionPlan;

use super::Context;
use crate::helpers::display::{display_evaluation, display_plans, print_json};

/// Evaluate a quota from a plan file and a usage count
pub async fn limit(ctx: &Context, plan_file: Option<&Path>, used: i64) -> Result<()> {
    let plan = match plan_file {
        Some(path) => Some(load_plan(path).await?),
        None => None,
    };

    let evaluation = evaluate_limit(plan.as_ref(), used)?;
    let prompt = upgrade_prompt(&evaluation);

    if ctx.json {
        return print_json(&json!({ "evaluation": evaluation, "prompt": prompt }));
    }
    display_evaluation(plan.as_ref().map(|plan| plan.name.as_str()), &evaluation, prompt);
    Ok(())
}

/// Plans offered by the backend
pub async fn plans(ctx: &Context) -> Result<()> {
    let plans = ctx.directory(None).await?.plans().await?;
    if ctx.json {
        return print_json(&plans);
    }
    display_plans(&plans);
    Ok(())
}

/// Whether the signed-in user may add another business
pub async fn allowance(ctx: &Context) -> Result<()> {
    let token = ctx.session().await?.require_token().await?;
    let allowance = ctx
        .directory(None)
        .await?
        .creation_allowance(&token)
        .await?;

    if ctx.json {
        return print_json(&allowance);
    }
    display_evaluation(None, &allowance.evaluation, allowance.prompt);
    Ok(())
}

async fn load_plan(path: &Path) -> Result<SubscriptionPlan> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a subscription plan", path.display()))
}
