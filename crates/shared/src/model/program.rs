use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A coaching program row from the `programs` table.
///
/// Field names match the store schema exactly, they cross the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_weeks: u32,
    pub price: f64,
    pub features: Vec<String>,
    pub image_url: String,
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
