use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A nutrition plan row from the `diet_plans` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub goal: Goal,
    pub calories_per_day: u32,
    pub macros: Macros,
    pub meal_plan: Vec<Meal>,
    pub restrictions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Daily macro targets, in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

/// A named meal and its foods, in the order the store returns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub meal: String,
    pub foods: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    GeneralHealth,
    /// Fallback for goal values newer than this build.
    #[serde(other)]
    Unknown,
}
