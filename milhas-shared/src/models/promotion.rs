use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

fn unusable_miles() -> f64 {
    f64::NAN
}

/// Accepts numbers and numeric strings. Anything else becomes NaN so the
/// promotion simply never matches instead of failing the whole payload.
fn lenient_miles<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let miles = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(miles.unwrap_or_else(unusable_miles))
}

/// A travel redemption offer ingested from an external source.
///
/// Field names on the wire follow the `scraped_promotions` columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrapedPromotion {
    pub id: Uuid,
    #[serde(rename = "programa")]
    pub program: String,
    #[serde(rename = "origem", default)]
    pub origin: Option<String>,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "milhas_min", default = "unusable_miles", deserialize_with = "lenient_miles")]
    pub min_miles: f64,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(rename = "titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "fonte", default)]
    pub source: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl ScrapedPromotion {
    pub fn new(program: impl Into<String>, destination: impl Into<String>, min_miles: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            program: program.into(),
            origin: None,
            destination: destination.into(),
            min_miles,
            link: None,
            title: None,
            description: None,
            source: None,
            created_at: Utc::now(),
        }
    }

    /// Miles must be a finite, non-negative amount to be comparable
    pub fn has_valid_miles(&self) -> bool {
        self.min_miles.is_finite() && self.min_miles >= 0.0
    }

    pub fn is_redeemable_with(&self, user_miles: f64) -> bool {
        self.has_valid_miles() && self.min_miles <= user_miles
    }
}
