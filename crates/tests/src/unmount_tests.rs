use crate::common::{DashboardFixture, SyntheticTarget};
use transport_hub::routes::dashboard::PROFILE_PANEL_ID;

const USER: &str = r#"{"name":"John Doe"}"#;

#[test]
fn unmount_removes_pointer_listener() {
    let fixture = DashboardFixture::with_user(USER);
    let view = fixture.mount();
    assert_eq!(fixture.pointer.listener_count(), 1);

    drop(view);
    assert_eq!(fixture.pointer.listener_count(), 0);
}

#[test]
fn pointer_events_after_unmount_reach_nobody() {
    let fixture = DashboardFixture::with_user(USER);
    let view = fixture.mount_open();
    drop(view);

    fixture.pointer.dispatch(&SyntheticTarget::outside());
    fixture
        .pointer
        .dispatch(&SyntheticTarget::inside(&[PROFILE_PANEL_ID]));
    assert_eq!(fixture.pointer.listener_count(), 0);
}

#[test]
fn remount_registers_a_fresh_listener() {
    let fixture = DashboardFixture::with_user(USER);
    drop(fixture.mount());

    let _second = fixture.mount();
    assert_eq!(fixture.pointer.listener_count(), 1);
}

#[test]
fn unmount_without_logout_schedules_nothing() {
    let fixture = DashboardFixture::with_user(USER);
    drop(fixture.mount());

    fixture.scheduler.advance_ms(10_000);
    assert_eq!(fixture.scheduler.pending(), 0);
    assert!(fixture.navigator.visited().is_empty());
}
