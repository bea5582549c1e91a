mod program;
pub use program::*;

mod workout;
pub use workout::*;

mod diet_plan;
pub use diet_plan::*;

mod testimonial;
pub use testimonial::*;

mod contact_submission;
pub use contact_submission::*;

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_program_row_deserializes() {
        let program: Program = serde_json::from_value(json!({
            "id": "11111111-1111-1111-1111-111111111111",
            "name": "Body Transformation",
            "description": "12 week full body overhaul",
            "duration_weeks": 12,
            "price": 299.0,
            "features": ["3 sessions per week", "Meal plan", "Weekly check-ins"],
            "image_url": "https://img.example/programs/transformation.jpg",
            "category": "transformation",
            "is_active": true,
            "created_at": "2024-02-01T09:30:00Z"
        }))
        .unwrap();

        assert_eq!(program.duration_weeks, 12);
        assert!(program.is_active);
        assert_eq!(program.features.len(), 3);
    }

    #[test]
    fn test_workout_optional_exercise_fields() {
        let workout: Workout = serde_json::from_value(json!({
            "id": "2",
            "name": "Full Body Blast",
            "description": "Compound lifts and a finisher",
            "difficulty": "intermediate",
            "duration_minutes": 45,
            "exercises": [
                { "name": "Squat", "sets": 5, "reps": 5 },
                { "name": "Plank", "sets": 3, "duration": "60s" }
            ],
            "target_muscles": ["legs", "core"],
            "equipment_needed": ["barbell"],
            "image_url": "https://img.example/workouts/blast.jpg",
            "created_at": "2024-01-15T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(workout.difficulty, Difficulty::Intermediate);
        assert_eq!(workout.exercises[0].reps, Some(5));
        assert_eq!(workout.exercises[0].duration, None);
        assert_eq!(workout.exercises[1].reps, None);
        assert_eq!(workout.exercises[1].duration.as_deref(), Some("60s"));
    }

    #[test]
    fn test_unrecognised_difficulty_falls_back_to_unknown() {
        let difficulty: Difficulty = serde_json::from_value(json!("elite")).unwrap();
        assert_eq!(difficulty, Difficulty::Unknown);
    }

    #[test]
    fn test_unrecognised_goal_falls_back_to_unknown() {
        let goal: Goal = serde_json::from_value(json!("bulking")).unwrap();
        assert_eq!(goal, Goal::Unknown);
    }

    #[test]
    fn test_diet_plan_row_deserializes() {
        let plan: DietPlan = serde_json::from_value(json!({
            "id": "3",
            "name": "Lean & Clean",
            "description": "Caloric deficit without the misery",
            "goal": "weight_loss",
            "calories_per_day": 1800,
            "macros": { "protein": 150, "carbs": 160, "fats": 55 },
            "meal_plan": [
                { "meal": "Breakfast", "foods": ["Oats", "Eggs"] },
                { "meal": "Lunch", "foods": ["Chicken", "Rice"] }
            ],
            "restrictions": ["gluten-free"],
            "created_at": "2024-03-10T08:00:00Z"
        }))
        .unwrap();

        assert_eq!(plan.goal, Goal::WeightLoss);
        assert_eq!(plan.macros.protein, 150);
        assert_eq!(plan.meal_plan[1].foods, vec!["Chicken", "Rice"]);
    }

    #[test]
    fn test_testimonial_program_id_is_optional() {
        let testimonial: Testimonial = serde_json::from_value(json!({
            "id": "4",
            "client_name": "Jane",
            "transformation_title": "Lost 14kg in 16 weeks",
            "story": "Never thought I'd enjoy training.",
            "before_image_url": "https://img.example/before.jpg",
            "after_image_url": "https://img.example/after.jpg",
            "weight_lost_kg": 14.0,
            "duration_weeks": 16,
            "program_id": null,
            "is_featured": true,
            "created_at": "2024-04-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(testimonial.program_id, None);
        assert!(testimonial.is_featured);
    }

    #[test]
    fn test_default_contact_submission_is_all_empty_strings() {
        let value = serde_json::to_value(ContactSubmission::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "",
                "email": "",
                "phone": "",
                "message": "",
                "preferred_program": ""
            })
        );
    }
}
