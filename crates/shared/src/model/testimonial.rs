use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client success story row from the `testimonials` table.
///
/// `weight_lost_kg` is signed, a negative value conventionally means the
/// client gained weight (muscle-gain transformations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub client_name: String,
    pub transformation_title: String,
    pub story: String,
    pub before_image_url: String,
    pub after_image_url: String,
    pub weight_lost_kg: f64,
    pub duration_weeks: u32,
    /// Weak reference to the program the client followed, lookup only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}
