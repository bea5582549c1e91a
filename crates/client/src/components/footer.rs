use leptos::{component, view, CollectView, IntoView};

use crate::nav::Section;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-300 py-12">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row items-center justify-between gap-6">
                    <div class="flex items-center space-x-2">
                        <div class="w-10 h-10 bg-primary-600 rounded-lg flex items-center justify-center">
                            <span class="text-white font-bold text-xl">"FT"</span>
                        </div>
                        <span class="font-bold text-xl text-white">"FitTransform"</span>
                    </div>

                    <nav class="flex flex-wrap gap-6">
                        { Section::ALL.iter().map(|&section| view! {
                            <button
                                class="hover:text-white transition-colors"
                                on:click=move |_| section.scroll_into_view()
                            >
                                { section.ui_text() }
                            </button>
                        }).collect_view() }
                    </nav>

                    <small>{ format!("Version: {}", env!("CARGO_PKG_VERSION")) }</small>
                </div>

                <p class="text-center text-sm text-gray-500 mt-8">
                    "FitTransform. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
