//! Terminal user interface
//!
//! Components, the application shell and the event loop driving them.

pub mod app_component;
pub mod components;
pub mod core;
pub mod renderer;

pub use app_component::{AppComponent, View};
pub use renderer::run_app;
