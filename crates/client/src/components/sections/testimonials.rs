use leptos::{
    component, create_local_resource, view, CollectView, IntoView, SignalGet, Transition,
};
use shared::{
    model::Testimonial,
    store::{Direction, Select, StoreClient, Table},
};
use tracing::error;

/// "14kg lost" / "5kg gained". Negative `weight_lost_kg` conventionally
/// means the client gained weight.
pub fn weight_change_label(weight_lost_kg: f64) -> String {
    let direction = if weight_lost_kg < 0.0 { "gained" } else { "lost" };
    format!("{}kg {direction}", weight_lost_kg.abs())
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let store = StoreClient::use_client();
    let testimonials = create_local_resource(
        || (),
        move |_| {
            let store = store.clone();
            async move {
                let query = Select::from_table(Table::Testimonials)
                    .eq("is_featured", true)
                    .order("created_at", Direction::Descending);
                match store.select::<Testimonial>(query).await {
                    Ok(rows) => rows,
                    Err(err) => {
                        error!("Error fetching testimonials: {err}");
                        Vec::new()
                    }
                }
            }
        },
    );

    view! {
        <section id="testimonials" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="section-title text-gray-900">"Success Stories"</h2>
                    <p class="section-subtitle">
                        "Real people, real results. See what our clients have achieved"
                    </p>
                </div>

                <Transition fallback=move || view! {
                    <div class="text-center animate-pulse">"Loading testimonials..."</div>
                }>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        { move || testimonials.get().map(|rows| {
                            rows.into_iter().map(testimonial_card).collect_view()
                        }) }
                    </div>
                </Transition>
            </div>
        </section>
    }
}

fn testimonial_card(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-gray-50 to-white rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-300">
            <div class="p-6">
                <div class="grid grid-cols-2 gap-4 mb-6">
                    <div class="relative overflow-hidden rounded-lg">
                        <img src=testimonial.before_image_url alt="Before" class="w-full h-48 object-cover"/>
                        <div class="absolute bottom-2 left-2 bg-black/70 text-white px-2 py-1 rounded text-xs font-semibold">
                            "Before"
                        </div>
                    </div>
                    <div class="relative overflow-hidden rounded-lg">
                        <img src=testimonial.after_image_url alt="After" class="w-full h-48 object-cover"/>
                        <div class="absolute bottom-2 left-2 bg-primary-600 text-white px-2 py-1 rounded text-xs font-semibold">
                            "After"
                        </div>
                    </div>
                </div>

                <div class="mb-4">
                    <h3 class="text-xl font-bold text-gray-900 mb-1">{ testimonial.client_name }</h3>
                    <p class="text-primary-600 font-semibold mb-3">{ testimonial.transformation_title }</p>
                </div>

                <div class="flex items-center gap-4 mb-4 text-sm">
                    <div class="bg-primary-100 text-primary-800 px-3 py-1 rounded-full font-semibold">
                        { weight_change_label(testimonial.weight_lost_kg) }
                    </div>
                    <div class="bg-gray-100 text-gray-800 px-3 py-1 rounded-full font-semibold">
                        { format!("{} weeks", testimonial.duration_weeks) }
                    </div>
                </div>

                <p class="text-gray-600 text-sm leading-relaxed mb-4">
                    { format!("\u{201c}{}\u{201d}", testimonial.story) }
                </p>

                <div class="flex items-center text-yellow-500">
                    { (0..5).map(|_| view! { <span class="w-5 h-5">"★"</span> }).collect_view() }
                </div>
            </div>
        </div>
    }
}
