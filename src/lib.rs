pub mod app;
pub mod errors;
pub mod input;
#[path = "runner/mod.rs"]
pub mod runner;
#[path = "ui/mod.rs"]
pub mod ui;

pub use crate::app::catalog::{catalog, Template};
pub use crate::app::{App, Focus, RunId, Surface, UIState};
pub use crate::runner::demo::{DemoRunner, DemoStep};
