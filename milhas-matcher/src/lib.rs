pub mod destinations;
pub mod rules;
pub mod ranker;
pub mod suggestions;

pub use destinations::{Destination, Region, DESTINATIONS};
pub use rules::{check_match, MatchOutcome, MatchTier};
pub use ranker::{find_matching_promotions, get_best_promotion_for_goal, PromotionMatch};
pub use suggestions::{suggest_trips, TravelSuggestion};
