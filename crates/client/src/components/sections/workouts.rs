use leptos::{
    component, create_local_resource, view, CollectView, IntoView, SignalGet, Transition,
};
use shared::{
    model::{Difficulty, Workout},
    store::{Direction, Select, StoreClient, Table},
};
use tracing::error;

/// Badge styling per difficulty. Total over the enum, `Unknown` gets the
/// neutral style.
pub fn difficulty_badge_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "bg-green-100 text-green-800",
        Difficulty::Intermediate => "bg-yellow-100 text-yellow-800",
        Difficulty::Advanced => "bg-red-100 text-red-800",
        Difficulty::Unknown => "bg-gray-100 text-gray-800",
    }
}

#[component]
pub fn Workouts() -> impl IntoView {
    let store = StoreClient::use_client();
    let workouts = create_local_resource(
        || (),
        move |_| {
            let store = store.clone();
            async move {
                let query = Select::from_table(Table::Workouts)
                    .order("created_at", Direction::Descending);
                match store.select::<Workout>(query).await {
                    Ok(rows) => rows,
                    Err(err) => {
                        error!("Error fetching workouts: {err}");
                        Vec::new()
                    }
                }
            }
        },
    );

    view! {
        <section id="workouts" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="section-title text-gray-900">"Featured Workouts"</h2>
                    <p class="section-subtitle">
                        "Expert-designed workout routines for all fitness levels"
                    </p>
                </div>

                <Transition fallback=move || view! {
                    <div class="text-center animate-pulse">"Loading workouts..."</div>
                }>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        { move || workouts.get().map(|rows| {
                            rows.into_iter().map(workout_card).collect_view()
                        }) }
                    </div>
                </Transition>
            </div>
        </section>
    }
}

fn workout_card(workout: Workout) -> impl IntoView {
    let alt = workout.name.clone();
    let badge = format!(
        "{} px-3 py-1 rounded-full text-xs font-semibold uppercase",
        difficulty_badge_class(workout.difficulty)
    );

    view! {
        <div class="bg-gradient-to-br from-gray-50 to-gray-100 rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-300">
            <div class="relative h-56 overflow-hidden">
                <img src=workout.image_url alt=alt class="w-full h-full object-cover"/>
                <div class="absolute top-4 left-4">
                    <span class=badge>{ workout.difficulty.label() }</span>
                </div>
                <div class="absolute top-4 right-4 bg-black/70 text-white px-3 py-1 rounded-full text-sm font-semibold">
                    { format!("{} min", workout.duration_minutes) }
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-2xl font-bold text-gray-900 mb-2">{ workout.name }</h3>
                <p class="text-gray-600 mb-4">{ workout.description }</p>

                <div class="mb-4">
                    <div class="text-sm font-semibold text-gray-700 mb-2">"Target Muscles:"</div>
                    <div class="flex flex-wrap gap-2">
                        { workout.target_muscles.iter().map(|muscle| view! {
                            <span class="bg-primary-100 text-primary-800 px-3 py-1 rounded-full text-xs font-medium">
                                { muscle.clone() }
                            </span>
                        }).collect_view() }
                    </div>
                </div>

                <div class="mb-4">
                    <div class="text-sm font-semibold text-gray-700 mb-2">"Equipment:"</div>
                    <div class="flex flex-wrap gap-2">
                        { workout.equipment_needed.iter().map(|equipment| view! {
                            <span class="bg-gray-200 text-gray-700 px-3 py-1 rounded-full text-xs">
                                { equipment.clone() }
                            </span>
                        }).collect_view() }
                    </div>
                </div>

                <button class="w-full bg-primary-600 hover:bg-primary-700 text-white font-semibold py-3 rounded-lg transition-colors">
                    "View Details"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod test {
    use shared::model::Difficulty;

    use super::difficulty_badge_class;

    #[test]
    fn test_every_difficulty_has_a_badge_style() {
        for difficulty in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
            Difficulty::Unknown,
        ] {
            assert!(!difficulty_badge_class(difficulty).is_empty());
        }
    }

    #[test]
    fn test_unknown_difficulty_gets_the_neutral_style() {
        assert_eq!(
            difficulty_badge_class(Difficulty::Unknown),
            "bg-gray-100 text-gray-800"
        );
    }
}
