use std::sync::Arc;
use milhas_store::app_config::MatcherConfig;
use milhas_store::{GoalRepository, PromotionRepository};

#[derive(Clone)]
pub struct AppState {
    pub promotion_repo: Arc<dyn PromotionRepository>,
    pub goal_repo: Arc<dyn GoalRepository>,
    pub matcher: MatcherConfig,
}
