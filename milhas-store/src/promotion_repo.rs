use async_trait::async_trait;
use chrono::{DateTime, Utc};
use milhas_shared::ScrapedPromotion;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::{PromotionRepository, StoreResult};

pub struct StorePromotionRepository {
    pool: PgPool,
}

impl StorePromotionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PromotionRow {
    id: Uuid,
    programa: String,
    origem: Option<String>,
    destino: String,
    milhas_min: f64,
    link: Option<String>,
    titulo: Option<String>,
    descricao: Option<String>,
    fonte: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<PromotionRow> for ScrapedPromotion {
    fn from(row: PromotionRow) -> Self {
        Self {
            id: row.id,
            program: row.programa,
            origin: row.origem,
            destination: row.destino,
            min_miles: row.milhas_min,
            link: row.link,
            title: row.titulo,
            description: row.descricao,
            source: row.fonte,
            created_at: row.created_at,
        }
    }
}

const SELECT_PROMOTIONS: &str = "SELECT id, programa, origem, destino, milhas_min::FLOAT8 AS milhas_min, link, titulo, descricao, fonte, created_at FROM scraped_promotions";

#[async_trait]
impl PromotionRepository for StorePromotionRepository {
    async fn list_promotions(&self, destination: Option<&str>) -> StoreResult<Vec<ScrapedPromotion>> {
        let rows: Vec<PromotionRow> = if let Some(dest) = destination {
            let query = format!("{} WHERE destino ILIKE $1 ORDER BY created_at DESC", SELECT_PROMOTIONS);
            sqlx::query_as::<_, PromotionRow>(&query)
                .bind(format!("%{}%", dest))
                .fetch_all(&self.pool)
                .await?
        } else {
            let query = format!("{} ORDER BY created_at DESC", SELECT_PROMOTIONS);
            sqlx::query_as::<_, PromotionRow>(&query)
                .fetch_all(&self.pool)
                .await?
        };

        tracing::debug!("Loaded {} promotions", rows.len());
        Ok(rows.into_iter().map(ScrapedPromotion::from).collect())
    }
}
