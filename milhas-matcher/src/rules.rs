use milhas_shared::{MileageGoal, ScrapedPromotion};
use serde::{Deserialize, Serialize};

use crate::destinations::{Region, DESTINATIONS};

pub const EXACT_SCORE: u32 = 100;
pub const KEYWORD_EXACT_SCORE: u32 = 95;
pub const KEYWORD_SCORE: u32 = 80;
pub const REGION_SCORE: u32 = 70;

/// Which tier produced a match, strongest first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchTier {
    Exact,
    Keyword,
    Region,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub score: u32,
    pub tier: MatchTier,
    pub reason: String,
}

/// Score a single promotion against a single goal.
///
/// Tiers are tried in order (exact, keyword, region) and the first hit wins.
/// Returns `None` when no tier matches, when the destination is blank, or when
/// the promotion's miles are not a usable number.
pub fn check_match(promotion: &ScrapedPromotion, goal: &MileageGoal) -> Option<MatchOutcome> {
    if !promotion.has_valid_miles() {
        return None;
    }

    let promo_destination = promotion.destination.trim().to_lowercase();
    if promo_destination.is_empty() {
        return None;
    }

    let goal_text = goal.matching_text();

    exact_match(promotion, &promo_destination, &goal_text)
        .or_else(|| keyword_match(&promo_destination, &goal_text))
        .or_else(|| region_match(&promo_destination, &goal_text))
}

fn exact_match(promotion: &ScrapedPromotion, promo_destination: &str, goal_text: &str) -> Option<MatchOutcome> {
    if !goal_text.contains(promo_destination) {
        return None;
    }

    Some(MatchOutcome {
        score: EXACT_SCORE,
        tier: MatchTier::Exact,
        reason: format!("exact destination: {}", promotion.destination.trim()),
    })
}

fn keyword_match(promo_destination: &str, goal_text: &str) -> Option<MatchOutcome> {
    DESTINATIONS
        .iter()
        .filter(|dest| dest.identifies(promo_destination))
        .find_map(|dest| dest.keyword_in(goal_text))
        .map(|keyword| MatchOutcome {
            score: if keyword == promo_destination { KEYWORD_EXACT_SCORE } else { KEYWORD_SCORE },
            tier: MatchTier::Keyword,
            reason: format!("keyword match: {}", keyword),
        })
}

fn region_match(promo_destination: &str, goal_text: &str) -> Option<MatchOutcome> {
    Region::ALL
        .iter()
        .filter(|region| region.mentioned_in(goal_text))
        .find(|region| region.destinations().any(|dest| dest.identifies(promo_destination)))
        .map(|region| MatchOutcome {
            score: REGION_SCORE,
            tier: MatchTier::Region,
            reason: format!("matching region: {}", region.label()),
        })
}
