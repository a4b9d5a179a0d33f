mod app;
pub mod commands;
pub mod drag;
pub mod fade;
pub mod theme;

pub use app::{viewport_builder, AppContext, CountdownApp};
