use leptos::{
    component, create_local_resource, view, CollectView, IntoView, SignalGet, Transition,
};
use shared::{
    model::Program,
    store::{Direction, Select, StoreClient, Table},
};
use tracing::error;

#[component]
pub fn Programs() -> impl IntoView {
    let store = StoreClient::use_client();
    let programs = create_local_resource(
        || (),
        move |_| {
            let store = store.clone();
            async move {
                let query = Select::from_table(Table::Programs)
                    .eq("is_active", true)
                    .order("created_at", Direction::Descending);
                match store.select::<Program>(query).await {
                    Ok(rows) => rows,
                    Err(err) => {
                        error!("Error fetching programs: {err}");
                        Vec::new()
                    }
                }
            }
        },
    );

    view! {
        <section id="programs" class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="section-title text-gray-900">"Our Programs"</h2>
                    <p class="section-subtitle">
                        "Choose the perfect program tailored to your fitness goals"
                    </p>
                </div>

                <Transition fallback=move || view! {
                    <div class="text-center animate-pulse">"Loading programs..."</div>
                }>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        { move || programs.get().map(|rows| {
                            rows.into_iter().map(program_card).collect_view()
                        }) }
                    </div>
                </Transition>
            </div>
        </section>
    }
}

fn program_card(program: Program) -> impl IntoView {
    let alt = program.name.clone();
    view! {
        <div class="bg-white rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-300">
            <div class="relative h-48 overflow-hidden">
                <img src=program.image_url alt=alt class="w-full h-full object-cover"/>
                <div class="absolute top-4 right-4 bg-primary-600 text-white px-3 py-1 rounded-full text-sm font-semibold">
                    { format!("{} Weeks", program.duration_weeks) }
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-2xl font-bold text-gray-900 mb-2">{ program.name }</h3>
                <p class="text-gray-600 mb-4">{ program.description }</p>

                <ul class="space-y-2 mb-4">
                    { program.features.iter().take(3).map(|feature| view! {
                        <li class="flex items-start text-sm text-gray-700">
                            <span class="text-primary-600 mr-2">"✓"</span>
                            { feature.clone() }
                        </li>
                    }).collect_view() }
                </ul>

                <div class="flex items-center justify-between pt-4 border-t border-gray-200">
                    <span class="text-3xl font-bold text-gray-900">
                        { format!("${}", program.price) }
                    </span>
                    <button class="bg-primary-600 hover:bg-primary-700 text-white font-semibold py-2 px-6 rounded-lg transition-colors">
                        "Choose Plan"
                    </button>
                </div>
            </div>
        </div>
    }
}
