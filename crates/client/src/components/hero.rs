use leptos::{component, view, IntoView};

use crate::nav::Section;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-900 via-gray-800 to-primary-900">
            <div class="container mx-auto px-4 text-center text-white">
                <h1 class="text-5xl md:text-7xl font-bold mb-6">
                    "Transform Your Body, Transform Your Life"
                </h1>
                <p class="text-xl md:text-2xl text-gray-300 mb-10 max-w-3xl mx-auto">
                    "Personal coaching, proven programs and nutrition plans built around your goals"
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        class="btn-primary text-lg"
                        on:click=move |_| Section::Contact.scroll_into_view()
                    >
                        "Start Your Journey"
                    </button>
                    <button
                        class="btn-secondary text-lg"
                        on:click=move |_| Section::Programs.scroll_into_view()
                    >
                        "View Programs"
                    </button>
                </div>
            </div>
        </section>
    }
}
