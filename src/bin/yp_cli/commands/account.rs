// ABOUTME: Session and history commands for yp-cli
// ABOUTME: Login stores the token, logout wipes token and history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use anyhow::Result;
use serde_json::json;

use super::Context;
use crate::helpers::display::{display_history, print_json, print_line};

pub async fn login(ctx: &Context, token: &str) -> Result<()> {
    ctx.session().await?.login(token).await?;
    print_status(ctx, "Signed in")
}

pub async fn logout(ctx: &Context) -> Result<()> {
    ctx.session().await?.logout().await?;
    print_status(ctx, "Signed out, history cleared")
}

pub async fn history(ctx: &Context, clear: bool) -> Result<()> {
    let history = ctx.history().await?;
    if clear {
        history.clear().await?;
        return print_status(ctx, "History cleared");
    }

    let searches = history.recent_searches().await?;
    let viewed = history.recently_viewed().await?;
    if ctx.json {
        return print_json(&json!({
            "recent_searches": searches,
            "recently_viewed": viewed,
        }));
    }
    display_history(&searches, &viewed);
    Ok(())
}

fn print_status(ctx: &Context, message: &str) -> Result<()> {
    if ctx.json {
        return print_json(&json!({ "status": message }));
    }
    print_line(message);
    Ok(())
}
