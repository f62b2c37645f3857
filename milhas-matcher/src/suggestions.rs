use milhas_shared::{MileageGoal, ScrapedPromotion};
use serde::Serialize;

use crate::ranker::{get_best_promotion_for_goal, PromotionMatch};

/// Best promotion for one goal, framed against the user's balance
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelSuggestion<'a> {
    pub goal: &'a MileageGoal,
    pub best_match: PromotionMatch<'a>,
    pub redeemable: bool,
    /// Miles still missing to redeem the promotion, zero when redeemable
    pub miles_short: f64,
    pub goal_progress: f64,
}

/// One suggestion per goal that has any matching promotion.
///
/// Redeemable suggestions come first, then higher scores, then the ones the
/// user is closest to affording.
pub fn suggest_trips<'a>(
    promotions: &'a [ScrapedPromotion],
    goals: &'a [MileageGoal],
    user_miles: f64,
) -> Vec<TravelSuggestion<'a>> {
    let mut suggestions: Vec<TravelSuggestion<'a>> = goals
        .iter()
        .filter_map(|goal| {
            let best = get_best_promotion_for_goal(promotions, goal, user_miles)?;
            let redeemable = best.is_redeemable_with(user_miles);
            let miles_short = if redeemable {
                0.0
            } else {
                (best.promotion.min_miles - user_miles.max(0.0)).max(0.0)
            };

            Some(TravelSuggestion {
                goal,
                redeemable,
                miles_short,
                goal_progress: goal.progress_percent(),
                best_match: best,
            })
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.redeemable
            .cmp(&a.redeemable)
            .then_with(|| b.best_match.match_score.cmp(&a.best_match.match_score))
            .then_with(|| a.miles_short.total_cmp(&b.miles_short))
    });

    tracing::debug!("Built {} travel suggestions for {} goals", suggestions.len(), goals.len());

    suggestions
}
