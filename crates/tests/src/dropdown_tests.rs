use crate::common::{DashboardFixture, SyntheticTarget};
use pretty_assertions::assert_eq;
use shared_types::DropdownState;
use transport_hub::pointer::dropdown_after_pointer_down;
use transport_hub::routes::dashboard::{PROFILE_PANEL_ID, PROFILE_TRIGGER_ID};

const USER: &str = r#"{"name":"John Doe","email":"j@x.io","role":"dispatcher"}"#;

fn press(state: DropdownState, target: &SyntheticTarget) -> DropdownState {
    dropdown_after_pointer_down(state, target, PROFILE_TRIGGER_ID, PROFILE_PANEL_ID)
}

#[test]
fn press_on_trigger_is_left_to_its_click_handler() {
    let target = SyntheticTarget::inside(&[PROFILE_TRIGGER_ID]);
    assert_eq!(press(DropdownState::Open, &target), DropdownState::Open);
    assert_eq!(press(DropdownState::Closed, &target), DropdownState::Closed);
}

#[test]
fn pointer_never_opens_dropdown() {
    assert_eq!(
        press(DropdownState::Closed, &SyntheticTarget::outside()),
        DropdownState::Closed
    );
}

#[test]
fn mounted_dashboard_listens_once() {
    let fixture = DashboardFixture::with_user(USER);
    let _view = fixture.mount();
    assert_eq!(fixture.pointer.listener_count(), 1);
}

#[test]
fn trigger_click_opens_panel_with_details() {
    let fixture = DashboardFixture::with_user(USER);
    let view = fixture.mount_open();

    let html = view.html();
    assert!(html.contains("id=\"profile-panel\""), "{html}");
    assert!(html.contains("John Doe"), "{html}");
    assert!(html.contains("j@x.io"), "{html}");
    assert!(html.contains("dispatcher"), "{html}");
    assert!(html.contains("Logout"), "{html}");
}

#[test]
fn second_trigger_click_closes_panel() {
    let fixture = DashboardFixture::with_user(USER);
    let mut view = fixture.mount_open();

    view.click("id", PROFILE_TRIGGER_ID);
    let html = view.html();
    assert!(!html.contains("profile-panel"), "{html}");
}

#[test]
fn press_inside_open_panel_keeps_it_open() {
    let fixture = DashboardFixture::with_user(USER);
    let mut view = fixture.mount_open();

    fixture.press(&mut view, &SyntheticTarget::inside(&[PROFILE_PANEL_ID]));
    let html = view.html();
    assert!(html.contains("profile-panel"), "{html}");
}

#[test]
fn press_outside_open_panel_closes_it() {
    let fixture = DashboardFixture::with_user(USER);
    let mut view = fixture.mount_open();
    assert!(view.html().contains("profile-panel"));

    fixture.press(&mut view, &SyntheticTarget::inside(&[PROFILE_PANEL_ID]));
    assert!(view.html().contains("profile-panel"));

    fixture.press(&mut view, &SyntheticTarget::outside());
    let html = view.html();
    assert!(!html.contains("profile-panel"), "{html}");
    assert!(html.contains("profile-trigger"), "{html}");
}

#[test]
fn outside_press_on_closed_dropdown_changes_nothing() {
    let fixture = DashboardFixture::with_user(USER);
    let mut view = fixture.mount();

    fixture.press(&mut view, &SyntheticTarget::outside());

    let html = view.html();
    assert!(html.contains("profile-trigger"), "{html}");
    assert!(!html.contains("profile-panel"), "{html}");
}
