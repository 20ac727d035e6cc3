// ABOUTME: Subscription limit policy gating business creation
// ABOUTME: Single source of truth for remaining slots, creation permission and upgrade prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

//! # Subscription Limit Policy
//!
//! Every screen that offers "add a business" asks the same question: given
//! the user's plan and how many businesses they already own, may they create
//! another one? This module answers it once. The boundary is strict:
//! creation is allowed while `used < limit`, so a user on a 3-business plan
//! owning 3 businesses is blocked.

use tracing::debug;
use yp_core::constants::subscription::{APPROACHING_LIMIT_SLOTS, FREE_TIER_BUSINESS_LIMIT};
use yp_core::errors::LimitError;
use yp_core::models::{BusinessLimit, LimitEvaluation, Quota, SubscriptionPlan, UpgradePrompt};

/// Evaluate the user's business quota
///
/// `plan` is `None` when the user has no active subscription, which grants
/// the free tier of one business. `used_count` is the number of businesses
/// the user currently owns.
///
/// # Errors
///
/// Returns `LimitError::InvalidCount` if `used_count` is negative
pub fn evaluate_limit(
    plan: Option<&SubscriptionPlan>,
    used_count: i64,
) -> Result<LimitEvaluation, LimitError> {
    let used = u64::try_from(used_count).map_err(|_| LimitError::InvalidCount {
        count: used_count,
    })?;

    let business_limit = plan.map_or(
        BusinessLimit::Limited(FREE_TIER_BUSINESS_LIMIT),
        |plan| plan.business_limit,
    );

    let evaluation = match business_limit {
        BusinessLimit::Unlimited => LimitEvaluation {
            current_limit: Quota::Unlimited,
            used_count: used,
            remaining_slots: Quota::Unlimited,
            can_create: true,
        },
        BusinessLimit::Limited(limit) => {
            let limit = u64::from(limit);
            LimitEvaluation {
                current_limit: Quota::Limited(limit),
                used_count: used,
                remaining_slots: Quota::Limited(limit.saturating_sub(used)),
                can_create: used < limit,
            }
        }
    };

    debug!(
        plan = plan.map_or("free", |plan| plan.name.as_str()),
        limit = %evaluation.current_limit,
        used,
        can_create = evaluation.can_create,
        "Evaluated business limit"
    );

    Ok(evaluation)
}

/// Classify whether the user should be shown an upgrade prompt
///
/// A blocked user always gets `LimitReached`. `ApproachingLimit` is only
/// raised on plans allowing more than one business, since a one-business
/// plan goes straight from empty to full.
#[must_use]
pub fn upgrade_prompt(evaluation: &LimitEvaluation) -> UpgradePrompt {
    if !evaluation.can_create {
        return UpgradePrompt::LimitReached;
    }

    match (evaluation.current_limit, evaluation.remaining_slots) {
        (Quota::Limited(limit), Quota::Limited(remaining))
            if limit > u64::from(APPROACHING_LIMIT_SLOTS)
                && remaining == u64::from(APPROACHING_LIMIT_SLOTS) =>
        {
            UpgradePrompt::ApproachingLimit
        }
        _ => UpgradePrompt::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(limit: BusinessLimit) -> SubscriptionPlan {
        SubscriptionPlan::new("Test", 10.0, limit)
    }

    #[test]
    fn test_over_limit_usage_clamps_remaining_to_zero() {
        let evaluation = evaluate_limit(Some(&plan(BusinessLimit::Limited(2))), 5).unwrap();
        assert_eq!(evaluation.remaining_slots, Quota::Limited(0));
        assert!(!evaluation.can_create);
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let err = evaluate_limit(None, -1).unwrap_err();
        assert_eq!(err, LimitError::InvalidCount { count: -1 });
    }

    #[test]
    fn test_upgrade_prompt_classification() {
        let three = plan(BusinessLimit::Limited(3));

        let roomy = evaluate_limit(Some(&three), 1).unwrap();
        assert_eq!(upgrade_prompt(&roomy), UpgradePrompt::None);

        let last_slot = evaluate_limit(Some(&three), 2).unwrap();
        assert_eq!(upgrade_prompt(&last_slot), UpgradePrompt::ApproachingLimit);

        let full = evaluate_limit(Some(&three), 3).unwrap();
        assert_eq!(upgrade_prompt(&full), UpgradePrompt::LimitReached);
    }

    #[test]
    fn test_free_tier_never_approaches_only_reaches() {
        let empty = evaluate_limit(None, 0).unwrap();
        assert_eq!(upgrade_prompt(&empty), UpgradePrompt::None);

        let full = evaluate_limit(None, 1).unwrap();
        assert_eq!(upgrade_prompt(&full), UpgradePrompt::LimitReached);
    }

    #[test]
    fn test_unlimited_plan_never_prompts() {
        let evaluation = evaluate_limit(Some(&plan(BusinessLimit::Unlimited)), 500).unwrap();
        assert_eq!(upgrade_prompt(&evaluation), UpgradePrompt::None);
    }
}
