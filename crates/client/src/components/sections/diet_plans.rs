use leptos::{
    component, create_local_resource, view, CollectView, IntoView, Show, SignalGet, Transition,
};
use shared::{
    model::{DietPlan, Goal},
    store::{Direction, Select, StoreClient, Table},
};
use tracing::error;

/// Glyph per plan goal. Total over the enum with a fallback for `Unknown`.
pub fn goal_icon(goal: Goal) -> &'static str {
    match goal {
        Goal::WeightLoss => "🔥",
        Goal::MuscleGain => "💪",
        Goal::Maintenance => "⚖️",
        Goal::GeneralHealth => "🥗",
        Goal::Unknown => "🎯",
    }
}

#[component]
pub fn DietPlans() -> impl IntoView {
    let store = StoreClient::use_client();
    let plans = create_local_resource(
        || (),
        move |_| {
            let store = store.clone();
            async move {
                let query = Select::from_table(Table::DietPlans)
                    .order("created_at", Direction::Descending);
                match store.select::<DietPlan>(query).await {
                    Ok(rows) => rows,
                    Err(err) => {
                        error!("Error fetching diet plans: {err}");
                        Vec::new()
                    }
                }
            }
        },
    );

    view! {
        <section id="nutrition" class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="section-title text-gray-900">"Nutrition Plans"</h2>
                    <p class="section-subtitle">
                        "Scientifically-backed nutrition strategies to fuel your transformation"
                    </p>
                </div>

                <Transition fallback=move || view! {
                    <div class="text-center animate-pulse">"Loading diet plans..."</div>
                }>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        { move || plans.get().map(|rows| {
                            rows.into_iter().map(diet_plan_card).collect_view()
                        }) }
                    </div>
                </Transition>
            </div>
        </section>
    }
}

fn diet_plan_card(plan: DietPlan) -> impl IntoView {
    let has_restrictions = !plan.restrictions.is_empty();
    let restrictions = plan.restrictions.clone();

    view! {
        <div class="bg-white rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-300">
            <div class="bg-gradient-to-br from-primary-500 to-primary-700 p-6 text-white">
                <div class="text-4xl mb-3">{ goal_icon(plan.goal) }</div>
                <h3 class="text-2xl font-bold mb-2">{ plan.name }</h3>
                <p class="text-primary-100">{ plan.description }</p>
            </div>

            <div class="p-6">
                <div class="flex items-center justify-between mb-6">
                    <span class="text-gray-600 font-medium">"Daily Calories"</span>
                    <span class="text-2xl font-bold text-primary-600">
                        { plan.calories_per_day }
                    </span>
                </div>

                <div class="mb-6">
                    <div class="text-sm font-semibold text-gray-700 mb-3">"Macros"</div>
                    <div class="space-y-2">
                        <div class="flex justify-between items-center">
                            <span class="text-gray-600">"Protein"</span>
                            <span class="font-semibold text-gray-900">{ format!("{}g", plan.macros.protein) }</span>
                        </div>
                        <div class="flex justify-between items-center">
                            <span class="text-gray-600">"Carbs"</span>
                            <span class="font-semibold text-gray-900">{ format!("{}g", plan.macros.carbs) }</span>
                        </div>
                        <div class="flex justify-between items-center">
                            <span class="text-gray-600">"Fats"</span>
                            <span class="font-semibold text-gray-900">{ format!("{}g", plan.macros.fats) }</span>
                        </div>
                    </div>
                </div>

                <Show when=move || has_restrictions>
                    <div class="mb-6">
                        <div class="text-sm font-semibold text-gray-700 mb-2">"Dietary Options"</div>
                        <div class="flex flex-wrap gap-2">
                            { restrictions.iter().map(|restriction| view! {
                                <span class="bg-green-100 text-green-800 px-3 py-1 rounded-full text-xs font-medium">
                                    { restriction.clone() }
                                </span>
                            }).collect_view() }
                        </div>
                    </div>
                </Show>

                <div class="mb-4">
                    <div class="text-sm font-semibold text-gray-700 mb-2">"Sample Meals"</div>
                    <ul class="space-y-1">
                        { plan.meal_plan.iter().take(3).map(|meal| {
                            let first_food = meal.foods.first().cloned().unwrap_or_default();
                            view! {
                                <li class="text-sm text-gray-600 flex items-start">
                                    <span class="text-primary-600 mr-2">"•"</span>
                                    { format!("{}: {first_food}", meal.meal) }
                                </li>
                            }
                        }).collect_view() }
                    </ul>
                </div>

                <button class="w-full bg-primary-600 hover:bg-primary-700 text-white font-semibold py-3 rounded-lg transition-colors">
                    "Get This Plan"
                </button>
            </div>
        </div>
    }
}
