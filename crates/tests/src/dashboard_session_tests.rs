use crate::common::DashboardFixture;
use transport_hub::session::MemorySessionStore;

#[test]
fn signed_in_user_gets_initials_badge() {
    let fixture = DashboardFixture::with_user(r#"{"name":"John Doe","email":"j@x.io"}"#);
    let html = fixture.mount().html();
    assert!(html.contains("id=\"profile-trigger\""), "{html}");
    assert!(html.contains(">JD<"), "{html}");
    assert!(html.contains("title=\"User Profile\""), "{html}");
}

#[test]
fn single_word_name_gets_one_initial() {
    let fixture = DashboardFixture::with_user(r#"{"name":"madonna"}"#);
    let html = fixture.mount().html();
    assert!(html.contains(">M<"), "{html}");
}

#[test]
fn user_without_name_gets_placeholder() {
    let fixture = DashboardFixture::with_user(r#"{"email":"anon@x.io","role":"admin"}"#);
    let html = fixture.mount().html();
    assert!(html.contains("id=\"profile-trigger\""), "{html}");
    assert!(html.contains(">?<"), "{html}");
}

#[test]
fn malformed_session_hides_profile() {
    let fixture = DashboardFixture::with_user("{not json");
    let html = fixture.mount().html();
    assert!(!html.contains("profile-trigger"), "{html}");
    assert!(html.contains("Transportation Hub"), "{html}");
}

#[test]
fn empty_object_counts_as_signed_out() {
    let fixture = DashboardFixture::with_user("{}");
    let html = fixture.mount().html();
    assert!(!html.contains("profile-trigger"), "{html}");
}

#[test]
fn missing_entry_hides_profile() {
    let fixture = DashboardFixture::new(MemorySessionStore::new());
    let html = fixture.mount().html();
    assert!(!html.contains("profile-trigger"), "{html}");
}

#[test]
fn loading_leaves_the_session_untouched() {
    let fixture = DashboardFixture::with_user(r#"{"name":"John Doe"}"#);
    let _view = fixture.mount();
    assert!(fixture.session.contains("user"));
    assert!(fixture.navigator.visited().is_empty());
    assert!(fixture.notifier.messages().is_empty());
}

#[test]
fn dropdown_starts_closed() {
    let fixture = DashboardFixture::with_user(r#"{"name":"John Doe"}"#);
    let html = fixture.mount().html();
    assert!(!html.contains("profile-panel"), "{html}");
}

#[test]
fn dashboard_lists_booking_entry_points() {
    let fixture = DashboardFixture::new(MemorySessionStore::new());
    let html = fixture.mount().html();
    for text in [
        "Your complete logistics management solution",
        "Quick Access",
        "View All Bookings",
        "Create New Booking",
        "Why Choose Our Platform?",
        "Real-time Tracking",
    ] {
        assert!(html.contains(text), "missing {text:?} in {html}");
    }
    assert!(html.contains("data-theme=\"light\""), "{html}");
}

#[test]
fn dashboard_finishes_entrance_after_mount() {
    let fixture = DashboardFixture::new(MemorySessionStore::new());
    let mut view = fixture.mount();
    assert!(view.html().contains("is-pending"));

    view.flush();
    let html = view.html();
    assert!(html.contains("is-loaded"), "{html}");
}
