use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's named mileage savings target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MileageGoal {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_miles: f64,
    #[serde(default)]
    pub current_miles: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl MileageGoal {
    pub fn new(name: impl Into<String>, description: Option<String>, target_miles: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            target_miles,
            current_miles: 0.0,
            created_at: Some(Utc::now()),
        }
    }

    /// Lowercased name and description, the corpus destinations are searched in.
    pub fn matching_text(&self) -> String {
        let description = self.description.as_deref().unwrap_or("");
        format!("{} {}", self.name, description).to_lowercase()
    }

    pub fn miles_remaining(&self) -> f64 {
        (self.target_miles - self.current_miles).max(0.0)
    }

    /// Progress towards the target, clamped to 0..=100
    pub fn progress_percent(&self) -> f64 {
        if self.target_miles <= 0.0 {
            return 100.0;
        }
        let pct = self.current_miles / self.target_miles * 100.0;
        if pct.is_nan() {
            return 0.0;
        }
        pct.clamp(0.0, 100.0)
    }

    pub fn is_reached(&self) -> bool {
        self.current_miles >= self.target_miles
    }
}
