use async_trait::async_trait;
use milhas_shared::{MileageGoal, ScrapedPromotion};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repository::{GoalRepository, PromotionRepository, StoreError, StoreResult};

/// Process-local store backing the API tests
#[derive(Default)]
pub struct InMemoryStore {
    promotions: RwLock<Vec<ScrapedPromotion>>,
    goals: RwLock<Vec<(Uuid, MileageGoal)>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_promotion(&self, promotion: ScrapedPromotion) {
        self.promotions.write().await.push(promotion);
    }

    pub async fn insert_goal(&self, user_id: Uuid, goal: MileageGoal) {
        self.goals.write().await.push((user_id, goal));
    }
}

#[async_trait]
impl PromotionRepository for InMemoryStore {
    async fn list_promotions(&self, destination: Option<&str>) -> StoreResult<Vec<ScrapedPromotion>> {
        let needle = destination.map(|d| d.to_lowercase());
        let mut promotions: Vec<ScrapedPromotion> = self
            .promotions
            .read()
            .await
            .iter()
            .filter(|p| match &needle {
                Some(n) => p.destination.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .cloned()
            .collect();

        promotions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(promotions)
    }
}

#[async_trait]
impl GoalRepository for InMemoryStore {
    async fn list_goals(&self, user_id: Uuid) -> StoreResult<Vec<MileageGoal>> {
        Ok(self
            .goals
            .read()
            .await
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, goal)| goal.clone())
            .collect())
    }

    async fn get_goal(&self, id: Uuid) -> StoreResult<MileageGoal> {
        self.goals
            .read()
            .await
            .iter()
            .find(|(_, goal)| goal.id == id)
            .map(|(_, goal)| goal.clone())
            .ok_or_else(|| StoreError::NotFound(format!("Goal {} not found", id)))
    }
}
