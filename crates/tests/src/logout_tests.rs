use crate::common::{DashboardFixture, RecordingNavigator};
use pretty_assertions::assert_eq;
use shared_types::LogoutConfig;
use std::rc::Rc;
use transport_hub::config::app_config;
use transport_hub::logout::begin_logout;
use transport_hub::session::MemorySessionStore;
use transport_hub::teardown::Teardown;

const USER: &str = r#"{"name":"John Doe"}"#;

fn logout(fixture: &DashboardFixture, config: &LogoutConfig) -> Teardown {
    begin_logout(
        fixture.session.as_ref(),
        fixture.notifier.as_ref(),
        fixture.scheduler.as_ref(),
        fixture.navigator.clone(),
        "user",
        config,
    )
}

#[test]
fn logout_clears_session_immediately() {
    let fixture = DashboardFixture::with_user(USER);
    let _redirect = logout(&fixture, &app_config().logout);
    assert!(!fixture.session.contains("user"));
}

#[test]
fn logout_announces_success() {
    let fixture = DashboardFixture::with_user(USER);
    let _redirect = logout(&fixture, &app_config().logout);
    assert_eq!(
        fixture.notifier.messages(),
        vec!["Logged out successfully!".to_string()]
    );
}

#[test]
fn redirect_waits_for_full_delay() {
    let fixture = DashboardFixture::with_user(USER);
    let _redirect = logout(&fixture, &app_config().logout);

    fixture.scheduler.advance_ms(1499);
    assert!(fixture.navigator.visited().is_empty());

    fixture.scheduler.advance_ms(1);
    assert_eq!(fixture.navigator.visited(), vec!["/login".to_string()]);
}

#[test]
fn redirect_runs_once() {
    let fixture = DashboardFixture::with_user(USER);
    let _redirect = logout(&fixture, &app_config().logout);

    fixture.scheduler.advance_ms(5000);
    fixture.scheduler.advance_ms(5000);
    assert_eq!(fixture.navigator.visited().len(), 1);
    assert_eq!(fixture.scheduler.pending(), 0);
}

#[test]
fn dropping_the_handle_cancels_redirect() {
    let fixture = DashboardFixture::with_user(USER);
    let redirect = logout(&fixture, &app_config().logout);
    assert_eq!(fixture.scheduler.pending(), 1);

    drop(redirect);
    fixture.scheduler.advance_ms(2000);
    assert!(fixture.navigator.visited().is_empty());
    assert!(!fixture.session.contains("user"));
}

#[test]
fn logout_without_session_still_redirects() {
    let fixture = DashboardFixture::new(MemorySessionStore::new());
    let _redirect = logout(&fixture, &app_config().logout);
    fixture.scheduler.advance_ms(1500);
    assert_eq!(fixture.navigator.visited(), vec!["/login".to_string()]);
}

#[test]
fn configured_target_and_delay_are_honoured() {
    let fixture = DashboardFixture::with_user(USER);
    let config = LogoutConfig {
        redirect_path: "/goodbye".to_string(),
        redirect_delay_ms: 200,
        message: "Bye".to_string(),
    };
    let _redirect = logout(&fixture, &config);

    fixture.scheduler.advance_ms(199);
    assert!(fixture.navigator.visited().is_empty());
    fixture.scheduler.advance_ms(1);
    assert_eq!(fixture.navigator.visited(), vec!["/goodbye".to_string()]);
    assert_eq!(fixture.notifier.messages(), vec!["Bye".to_string()]);
}

#[test]
fn refused_redirect_does_not_panic() {
    let fixture = DashboardFixture::with_user(USER);
    let navigator = Rc::new(RecordingNavigator::refusing());
    let _redirect = begin_logout(
        fixture.session.as_ref(),
        fixture.notifier.as_ref(),
        fixture.scheduler.as_ref(),
        navigator.clone(),
        "user",
        &app_config().logout,
    );

    fixture.scheduler.advance_ms(1500);
    assert_eq!(navigator.visited(), vec!["/login".to_string()]);
}

#[test]
fn logout_button_signs_out_in_place() {
    let fixture = DashboardFixture::with_user(USER);
    let mut view = fixture.mount_open();

    view.click("data-style", "destructive");

    assert!(!fixture.session.contains("user"));
    assert_eq!(
        fixture.notifier.messages(),
        vec!["Logged out successfully!".to_string()]
    );
    let html = view.html();
    assert!(!html.contains("profile-trigger"), "{html}");
    assert!(!html.contains("profile-panel"), "{html}");
    assert_eq!(fixture.scheduler.pending(), 1);
    assert!(fixture.navigator.visited().is_empty());
}

#[test]
fn logout_button_redirects_after_delay() {
    let fixture = DashboardFixture::with_user(USER);
    let mut view = fixture.mount_open();
    view.click("data-style", "destructive");

    fixture.scheduler.advance_ms(1499);
    assert!(fixture.navigator.visited().is_empty());
    fixture.scheduler.advance_ms(1);
    assert_eq!(fixture.navigator.visited(), vec!["/login".to_string()]);
}

#[test]
fn unmount_after_logout_cancels_redirect() {
    let fixture = DashboardFixture::with_user(USER);
    let mut view = fixture.mount_open();
    view.click("data-style", "destructive");
    assert_eq!(fixture.scheduler.pending(), 1);

    drop(view);
    fixture.scheduler.advance_ms(2000);

    assert!(fixture.navigator.visited().is_empty());
    assert_eq!(fixture.scheduler.pending(), 0);
}
