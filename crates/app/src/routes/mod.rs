pub mod dashboard;
pub mod landing;
pub mod not_found;

use crate::navigation::RouterNavigator;
use crate::notify::ToastNotifier;
use crate::pointer::DocumentPointerSource;
use crate::schedule::TaskScheduler;
use crate::session::platform_store;
use dioxus::prelude::*;
use shared_types::EntrancePhase;
use shared_ui::{use_toast, ThemeState};
use std::rc::Rc;

use dashboard::{DashboardDeps, DashboardView};
use landing::{LandingDeps, LandingView};
use not_found::NotFound;

/// Application routes.
///
/// Paths not listed here (`/login`, `/register`, `/bookings`, ...) belong to
/// other front-ends and are reached with a full page load.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// CSS state class for the one-shot entrance transition.
pub(crate) fn entrance_class(phase: EntrancePhase) -> &'static str {
    if phase.is_loaded() {
        "is-loaded"
    } else {
        "is-pending"
    }
}

// Route components resolve the live collaborators and hand them to the
// views explicitly.

#[component]
fn Landing() -> Element {
    let theme = try_use_context::<ThemeState>();
    let nav = navigator();
    let deps = use_hook(move || LandingDeps {
        theme,
        navigator: Rc::new(RouterNavigator::new(nav)),
    });

    rsx! { LandingView { deps } }
}

#[component]
fn Dashboard() -> Element {
    let theme = try_use_context::<ThemeState>();
    let nav = navigator();
    let toasts = use_toast();
    let deps = use_hook(move || DashboardDeps {
        theme,
        session: platform_store(),
        navigator: Rc::new(RouterNavigator::new(nav)),
        notifier: Rc::new(ToastNotifier::new(toasts)),
        pointer: Rc::new(DocumentPointerSource),
        scheduler: Rc::new(TaskScheduler),
    });

    rsx! { DashboardView { deps } }
}
