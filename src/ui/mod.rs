mod animation;
mod input;
pub mod layout;
mod renderer;
mod result_view;
mod state;
pub mod theme;
mod widgets;

pub use renderer::render;
pub use state::{AppState, Focus};
pub use theme::Theme;
