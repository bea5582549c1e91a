use leptos::{
    component, create_signal, ev, on_cleanup, view, window, window_event_listener, CollectView,
    IntoView, Show, SignalGet, SignalSet, SignalUpdate,
};

use crate::nav::Section;

/// Scroll depth in px past which the header swaps to its solid theme.
const SCROLL_THRESHOLD: f64 = 50.0;

#[component]
pub fn Header() -> impl IntoView {
    let (scrolled, set_scrolled) = create_signal(false);
    let (menu_open, set_menu_open) = create_signal(false);

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(window().scroll_y().unwrap_or_default() > SCROLL_THRESHOLD);
    });
    on_cleanup(move || scroll_listener.remove());

    // Jumping from the mobile menu also closes it
    let go_to = move |section: Section| {
        section.scroll_into_view();
        set_menu_open.set(false);
    };

    let header_class = move || {
        if scrolled.get() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white shadow-lg"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
        }
    };
    let brand_class = move || {
        if scrolled.get() {
            "font-bold text-xl text-gray-900"
        } else {
            "font-bold text-xl text-white"
        }
    };
    let nav_item_class = move || {
        if scrolled.get() {
            "font-medium transition-colors text-gray-700 hover:text-primary-600"
        } else {
            "font-medium transition-colors text-white hover:text-primary-300"
        }
    };

    view! {
        <header class=header_class>
            <div class="container mx-auto px-4 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-2">
                        <div class="w-10 h-10 bg-primary-600 rounded-lg flex items-center justify-center">
                            <span class="text-white font-bold text-xl">"FT"</span>
                        </div>
                        <span class=brand_class>"FitTransform"</span>
                    </div>

                    <nav class="hidden md:flex items-center space-x-8">
                        { Section::ALL.iter().map(|&section| view! {
                            <button class=nav_item_class on:click=move |_| go_to(section)>
                                { section.ui_text() }
                            </button>
                        }).collect_view() }
                    </nav>

                    <button
                        class="hidden md:block btn-primary text-sm"
                        on:click=move |_| go_to(Section::Contact)
                    >
                        "Get Started"
                    </button>

                    <button
                        class="md:hidden text-2xl"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        { move || if menu_open.get() { "✕" } else { "☰" } }
                    </button>
                </div>

                <Show when=move || menu_open.get()>
                    <nav class="md:hidden mt-4 pb-4">
                        { Section::ALL.iter().map(|&section| view! {
                            <button
                                class="block w-full text-left py-2 font-medium"
                                on:click=move |_| go_to(section)
                            >
                                { section.ui_text() }
                            </button>
                        }).collect_view() }
                    </nav>
                </Show>
            </div>
        </header>
    }
}
