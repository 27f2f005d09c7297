mod components;
mod handlers;
mod screens;

pub use components::{CatalogClientUI, InputMode};
pub use screens::render;
