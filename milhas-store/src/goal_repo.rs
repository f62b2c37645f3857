use async_trait::async_trait;
use chrono::{DateTime, Utc};
use milhas_shared::MileageGoal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::{GoalRepository, StoreError, StoreResult};

pub struct StoreGoalRepository {
    pool: PgPool,
}

impl StoreGoalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GoalRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    target_miles: f64,
    current_miles: f64,
    created_at: Option<DateTime<Utc>>,
}

impl From<GoalRow> for MileageGoal {
    fn from(row: GoalRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            target_miles: row.target_miles,
            current_miles: row.current_miles,
            created_at: row.created_at,
        }
    }
}

const SELECT_GOALS: &str = "SELECT id, name, description, target_miles::FLOAT8 AS target_miles, current_miles::FLOAT8 AS current_miles, created_at FROM mileage_goals";

#[async_trait]
impl GoalRepository for StoreGoalRepository {
    async fn list_goals(&self, user_id: Uuid) -> StoreResult<Vec<MileageGoal>> {
        let query = format!("{} WHERE user_id = $1 ORDER BY created_at", SELECT_GOALS);
        let rows = sqlx::query_as::<_, GoalRow>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(MileageGoal::from).collect())
    }

    async fn get_goal(&self, id: Uuid) -> StoreResult<MileageGoal> {
        let query = format!("{} WHERE id = $1", SELECT_GOALS);
        let row = sqlx::query_as::<_, GoalRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(MileageGoal::from)
            .ok_or_else(|| StoreError::NotFound(format!("Goal {} not found", id)))
    }
}
