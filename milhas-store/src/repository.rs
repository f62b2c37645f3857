use async_trait::async_trait;
use milhas_shared::{MileageGoal, ScrapedPromotion};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to ingested promotions
#[async_trait]
pub trait PromotionRepository: Send + Sync {
    /// All promotions, newest first, optionally narrowed by a
    /// case-insensitive substring of the destination
    async fn list_promotions(&self, destination: Option<&str>) -> StoreResult<Vec<ScrapedPromotion>>;
}

/// Read access to users' mileage goals
#[async_trait]
pub trait GoalRepository: Send + Sync {
    async fn list_goals(&self, user_id: Uuid) -> StoreResult<Vec<MileageGoal>>;

    /// Fails with `StoreError::NotFound` when no goal has this id
    async fn get_goal(&self, id: Uuid) -> StoreResult<MileageGoal>;
}
