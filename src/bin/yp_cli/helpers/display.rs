// ABOUTME: Output formatting helpers for yp-cli
// ABOUTME: Text tables for businesses, quotas and history, plus JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use anyhow::Result;
use serde::Serialize;
use yellowpages::history::ViewedBusiness;
use yellowpages::intelligence::format_distance;
use yellowpages::models::{
    Business, DistanceAnnotated, LimitEvaluation, SubscriptionPlan, UpgradePrompt,
};
use yellowpages::services::ListingEntry;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_line(line: &str) {
    println!("{line}");
}

fn describe(business: &Business) -> String {
    let mut line = business.name.clone();
    if let Some(category) = &business.category {
        line.push_str(&format!(" [{category}]"));
    }
    if let Some(city) = &business.city {
        line.push_str(&format!(", {city}"));
    }
    line
}

pub fn display_nearby(hits: &[DistanceAnnotated<Business>], radius_km: f64) {
    if hits.is_empty() {
        println!("No businesses within {}", format_distance(radius_km));
        return;
    }
    println!("{} businesses within {}", hits.len(), format_distance(radius_km));
    println!("{}", "=".repeat(60));
    for hit in hits {
        println!(
            "{:>10}  #{:<6} {}",
            format_distance(hit.distance_km),
            hit.entity.id,
            describe(&hit.entity)
        );
    }
}

pub fn display_listing(entries: &[ListingEntry]) {
    println!("{} businesses", entries.len());
    println!("{}", "=".repeat(60));
    for entry in entries {
        let distance = entry
            .distance_km
            .map_or_else(|| "?".to_owned(), format_distance);
        println!(
            "{distance:>10}  #{:<6} {}",
            entry.business.id,
            describe(&entry.business)
        );
    }
}

pub fn display_plans(plans: &[SubscriptionPlan]) {
    for plan in plans {
        println!(
            "{:<16} {:>8.2}  {} businesses",
            plan.name,
            plan.price,
            plan.business_limit
        );
    }
}

pub fn display_evaluation(
    plan: Option<&str>,
    evaluation: &LimitEvaluation,
    prompt: UpgradePrompt,
) {
    if let Some(plan) = plan {
        println!("Plan:      {plan}");
    }
    println!("Limit:     {}", evaluation.current_limit);
    println!("Used:      {}", evaluation.used_count);
    println!("Remaining: {}", evaluation.remaining_slots);
    println!(
        "Can add:   {}",
        if evaluation.can_create { "yes" } else { "no" }
    );
    match prompt {
        UpgradePrompt::None => {}
        UpgradePrompt::ApproachingLimit => {
            println!("\nOne slot left on this plan. Upgrade to list more businesses.");
        }
        UpgradePrompt::LimitReached => {
            println!("\nBusiness limit reached. Upgrade your plan to add another business.");
        }
    }
}

pub fn display_history(searches: &[String], viewed: &[ViewedBusiness]) {
    println!("Recent searches:");
    if searches.is_empty() {
        println!("   (none)");
    }
    for query in searches {
        println!("   {query}");
    }

    println!("\nRecently viewed:");
    if viewed.is_empty() {
        println!("   (none)");
    }
    for entry in viewed {
        println!(
            "   #{:<6} {}  ({})",
            entry.id,
            entry.name,
            entry.viewed_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
}
