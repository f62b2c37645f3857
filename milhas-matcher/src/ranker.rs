use milhas_shared::{MileageGoal, ScrapedPromotion};
use serde::Serialize;

use crate::rules::{check_match, MatchTier};

/// A promotion paired with a goal it satisfies. Never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionMatch<'a> {
    pub promotion: &'a ScrapedPromotion,
    pub goal: &'a MileageGoal,
    pub match_score: u32,
    pub match_tier: MatchTier,
    pub match_reason: String,
}

impl PromotionMatch<'_> {
    pub fn is_redeemable_with(&self, user_miles: f64) -> bool {
        self.promotion.is_redeemable_with(user_miles)
    }
}

/// Match every promotion against every goal.
///
/// Result is sorted by score descending, then by the promotion's minimum miles
/// ascending. Pairs with the same score and miles keep input order.
pub fn find_matching_promotions<'a>(
    promotions: &'a [ScrapedPromotion],
    goals: &'a [MileageGoal],
) -> Vec<PromotionMatch<'a>> {
    let mut matches: Vec<PromotionMatch<'a>> = promotions
        .iter()
        .flat_map(|promotion| goals.iter().map(move |goal| (promotion, goal)))
        .filter_map(|(promotion, goal)| {
            check_match(promotion, goal).map(|outcome| PromotionMatch {
                promotion,
                goal,
                match_score: outcome.score,
                match_tier: outcome.tier,
                match_reason: outcome.reason,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| a.promotion.min_miles.total_cmp(&b.promotion.min_miles))
    });

    tracing::debug!(
        "Matched {} pairs out of {} promotions x {} goals",
        matches.len(),
        promotions.len(),
        goals.len()
    );

    matches
}

/// Best promotion for one goal given the user's balance.
///
/// A redeemable match always wins over a stronger one the user cannot afford.
/// When nothing is redeemable the top match is returned as an aspirational target.
pub fn get_best_promotion_for_goal<'a>(
    promotions: &'a [ScrapedPromotion],
    goal: &'a MileageGoal,
    user_miles: f64,
) -> Option<PromotionMatch<'a>> {
    let mut matches = find_matching_promotions(promotions, std::slice::from_ref(goal));
    if matches.is_empty() {
        return None;
    }

    let index = matches
        .iter()
        .position(|m| m.is_redeemable_with(user_miles))
        .unwrap_or(0);

    Some(matches.swap_remove(index))
}
