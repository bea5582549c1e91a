use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workout routine row from the `workouts` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub exercises: Vec<Exercise>,
    pub target_muscles: Vec<String>,
    pub equipment_needed: Vec<String>,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// One entry of a workout's exercise list. Either `reps` or `duration` may
/// be present depending on whether the exercise is rep or time based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    /// Rows with a difficulty this build doesn't know about still render.
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Unknown => "all levels",
        }
    }
}
