use leptos::{component, view, IntoView};
use shared::store::{StoreClient, StoreConfig};

use crate::components::{
    forms::Contact,
    sections::{DietPlans, Programs, Testimonials, Workouts},
    Footer, Header, Hero,
};

#[component]
pub fn App() -> impl IntoView {
    // One configured handle for the whole tree; sections and the lead
    // form pick it up from context so tests can substitute their own.
    StoreClient::provide_context(StoreConfig::from_build_env());

    view! {
        <div class="min-h-screen">
            <Header/>
            <Hero/>
            <Programs/>
            <Workouts/>
            <DietPlans/>
            <Testimonials/>
            <Contact/>
            <Footer/>
        </div>
    }
}
