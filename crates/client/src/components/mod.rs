mod app;
pub use app::*;

mod header;
pub use header::*;

mod hero;
pub use hero::*;

mod footer;
pub use footer::*;

pub mod forms;
pub mod sections;
