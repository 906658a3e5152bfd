pub mod config;
pub mod logout;
pub mod navigation;
pub mod notify;
pub mod pointer;
pub mod routes;
pub mod schedule;
pub mod session;
pub mod teardown;

use dioxus::prelude::*;
use shared_ui::{ThemeProvider, ToastProvider};

pub use routes::Route;

const THEME_BASE_CSS: Asset = asset!("/assets/theme-base.css");

/// Root component: shared palette, theme context, toasts and the router.
#[component]
pub fn App() -> Element {
    let config = config::app_config();
    tracing::info!(theme = config.theme.default_mode.as_str(), "starting transport hub");

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE_CSS }

        ThemeProvider {
            default_mode: config.theme.default_mode,
            storage_key: config.theme.storage_key.clone(),
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
