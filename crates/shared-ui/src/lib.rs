pub mod components;
pub mod theme;

pub use components::*;
pub use theme::{use_theme_binding, ThemeProvider, ThemeState};
