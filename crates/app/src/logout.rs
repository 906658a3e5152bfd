use crate::navigation::{navigate_or_log, Navigate};
use crate::notify::Notifier;
use crate::schedule::Scheduler;
use crate::session::SessionStore;
use crate::teardown::Teardown;
use shared_types::LogoutConfig;
use std::rc::Rc;

/// Sign the user out of this browser.
///
/// The session entry is gone and the toast is up by the time this returns.
/// The redirect runs after the configured grace period, unless the returned
/// handle is dropped first.
pub fn begin_logout(
    session: &dyn SessionStore,
    notifier: &dyn Notifier,
    scheduler: &dyn Scheduler,
    navigator: Rc<dyn Navigate>,
    user_key: &str,
    config: &LogoutConfig,
) -> Teardown {
    session.remove(user_key);
    notifier.success(&config.message);

    let path = config.redirect_path.clone();
    tracing::info!(
        delay_ms = config.redirect_delay_ms,
        path = %path,
        "signed out, redirect scheduled"
    );

    scheduler.schedule(
        config.redirect_delay(),
        Box::new(move || navigate_or_log(navigator.as_ref(), &path)),
    )
}
