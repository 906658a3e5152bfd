use crate::routes::Route;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use shared_types::AppError;
use std::str::FromStr;

/// Something that can move the user to another page.
pub trait Navigate {
    fn navigate(&self, path: &str) -> Result<(), AppError>;
}

/// Navigate, logging instead of propagating a failure.
///
/// Click handlers call this so a rejected navigation never reaches the user.
pub fn navigate_or_log(navigator: &dyn Navigate, path: &str) {
    if let Err(err) = navigator.navigate(path) {
        tracing::warn!(%err, path, "navigation failed");
    }
}

/// Map a path to an in-app route, or to a full page load for pages this
/// front-end does not serve (`/login`, `/bookings`, ...).
pub fn route_target(path: &str) -> NavigationTarget<Route> {
    match Route::from_str(path) {
        Ok(Route::NotFound { .. }) | Err(_) => NavigationTarget::External(path.to_string()),
        Ok(route) => NavigationTarget::Internal(route),
    }
}

/// [`Navigate`] backed by the Dioxus router.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigator: Navigator,
}

impl RouterNavigator {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl Navigate for RouterNavigator {
    fn navigate(&self, path: &str) -> Result<(), AppError> {
        tracing::debug!(path, "navigating");
        match self.navigator.push(route_target(path)) {
            None => Ok(()),
            Some(_) => Err(AppError::navigation(format!(
                "{path} was rejected by the router"
            ))),
        }
    }
}
