//! The four entity views. Each one fetches its table exactly once per
//! mount through a component-scoped resource, falls back to an empty list
//! on failure (logged, never user visible) and renders one card per row.

mod programs;
pub use programs::*;

mod workouts;
pub use workouts::*;

mod diet_plans;
pub use diet_plans::*;

mod testimonials;
pub use testimonials::*;
