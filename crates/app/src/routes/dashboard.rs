use crate::config::app_config;
use crate::logout::begin_logout;
use crate::navigation::{navigate_or_log, Navigate};
use crate::notify::Notifier;
use crate::pointer::{dropdown_after_pointer_down, PointerHandler, PointerSource, PointerTarget};
use crate::routes::entrance_class;
use crate::schedule::Scheduler;
use crate::session::{load_session_user, SessionStore};
use crate::teardown::Teardown;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdMapPin, LdPackage, LdPlus, LdTruck, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{DropdownState, EntrancePhase, ThemeMode, UserRecord};
use shared_ui::{
    use_theme_binding, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, ThemeState, ThemeToggle,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const PROFILE_TRIGGER_ID: &str = "profile-trigger";
pub const PROFILE_PANEL_ID: &str = "profile-panel";
pub const BOOKINGS_PATH: &str = "/bookings";
pub const NEW_BOOKING_PATH: &str = "/user";

/// Collaborators the dashboard needs.
#[derive(Clone)]
pub struct DashboardDeps {
    pub theme: Option<ThemeState>,
    pub session: Rc<dyn SessionStore>,
    pub navigator: Rc<dyn Navigate>,
    pub notifier: Rc<dyn Notifier>,
    pub pointer: Rc<dyn PointerSource>,
    pub scheduler: Rc<dyn Scheduler>,
}

impl PartialEq for DashboardDeps {
    fn eq(&self, other: &Self) -> bool {
        self.theme == other.theme
            && Rc::ptr_eq(&self.session, &other.session)
            && Rc::ptr_eq(&self.navigator, &other.navigator)
            && Rc::ptr_eq(&self.notifier, &other.notifier)
            && Rc::ptr_eq(&self.pointer, &other.pointer)
            && Rc::ptr_eq(&self.scheduler, &other.scheduler)
    }
}

/// Icons used on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Glyph {
    Clock,
    MapPin,
    Package,
    Plus,
    Truck,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tone {
    Accent,
    Success,
    Muted,
}

impl Tone {
    fn as_str(&self) -> &'static str {
        match self {
            Tone::Accent => "accent",
            Tone::Success => "success",
            Tone::Muted => "muted",
        }
    }
}

struct Tile {
    glyph: Glyph,
    tone: Tone,
    label: &'static str,
    value: &'static str,
}

static QUICK_ACCESS: [Tile; 3] = [
    Tile { glyph: Glyph::User, tone: Tone::Accent, label: "Quick Access", value: "Dashboard" },
    Tile { glyph: Glyph::Package, tone: Tone::Success, label: "Manage", value: "Bookings" },
    Tile { glyph: Glyph::Plus, tone: Tone::Muted, label: "Create New", value: "Request" },
];

struct Highlight {
    glyph: Glyph,
    title: &'static str,
    body: &'static str,
}

static PLATFORM_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        glyph: Glyph::Clock,
        title: "Real-time Tracking",
        body: "Monitor your shipments in real-time with live updates and notifications.",
    },
    Highlight {
        glyph: Glyph::Truck,
        title: "Flexible Fleet",
        body: "Choose from a variety of vehicles to match your cargo size and budget.",
    },
    Highlight {
        glyph: Glyph::MapPin,
        title: "Wide Coverage",
        body: "Pickup and delivery across the city with transparent pricing.",
    },
];

fn page_class(mode: ThemeMode, phase: EntrancePhase) -> String {
    format!("dashboard dashboard--{} {}", mode.as_str(), entrance_class(phase))
}

fn field_or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("\u{2014}")
}

/// Signed-in home: profile menu, quick access and booking entry points.
#[component]
pub fn DashboardView(deps: DashboardDeps) -> Element {
    let config = app_config();
    let theme = use_theme_binding(deps.theme);
    let mode = theme.mode();

    let session = deps.session.clone();
    let mut user =
        use_signal(move || load_session_user(session.as_ref(), &config.session.user_key));
    let mut dropdown = use_signal(DropdownState::default);

    let mut phase = use_signal(EntrancePhase::default);
    use_effect(move || {
        let next = phase.peek().mounted();
        phase.set(next);
    });

    // Outside-click detection for the profile dropdown.
    let pointer = deps.pointer.clone();
    let listener = use_hook(move || {
        let handler: PointerHandler = Rc::new(move |target: &dyn PointerTarget| {
            let current = *dropdown.peek();
            let next =
                dropdown_after_pointer_down(current, target, PROFILE_TRIGGER_ID, PROFILE_PANEL_ID);
            if next != current {
                let mut dropdown = dropdown;
                dropdown.set(next);
            }
        });
        Rc::new(RefCell::new(Some(pointer.on_pointer_down(handler))))
    });
    let pending_redirect = use_hook(|| Rc::new(RefCell::new(None::<Teardown>)));

    use_drop({
        let pending_redirect = pending_redirect.clone();
        move || {
            listener.borrow_mut().take();
            pending_redirect.borrow_mut().take();
        }
    });

    let on_logout = {
        let deps = deps.clone();
        move |_: MouseEvent| {
            let redirect = begin_logout(
                deps.session.as_ref(),
                deps.notifier.as_ref(),
                deps.scheduler.as_ref(),
                deps.navigator.clone(),
                &config.session.user_key,
                &config.logout,
            );
            pending_redirect.borrow_mut().replace(redirect);
            user.set(None);
            dropdown.set(DropdownState::Closed);
        }
    };

    let go = |path: &'static str| {
        let navigator = deps.navigator.clone();
        move |_: MouseEvent| navigate_or_log(navigator.as_ref(), path)
    };

    let profile = user.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: page_class(mode, phase()), "data-theme": mode.as_str(),
            header { class: "dashboard-topbar",
                span { class: "dashboard-brand",
                    GlyphIcon { glyph: Glyph::Truck, size: 22 }
                    "Transport Hub"
                }
                div { class: "dashboard-topbar-actions",
                    ThemeToggle { theme }
                    if let Some(profile) = profile {
                        ProfileMenu {
                            user: profile,
                            open: dropdown().is_open(),
                            on_toggle: move |_| {
                                let next = dropdown.peek().toggled();
                                dropdown.set(next);
                            },
                            on_logout,
                        }
                    }
                }
            }

            section { class: "dashboard-hero reveal",
                h1 { class: "dashboard-title", "Transportation Hub" }
                p { class: "dashboard-subtitle", "Your complete logistics management solution" }
                div { class: "dashboard-hero-rule" }
            }

            div { class: "dashboard-tiles reveal",
                for tile in QUICK_ACCESS.iter() {
                    div { class: "dashboard-tile", "data-tone": tile.tone.as_str(),
                        div { class: "dashboard-tile-icon",
                            GlyphIcon { glyph: tile.glyph, size: 22 }
                        }
                        div {
                            p { class: "dashboard-tile-label", "{tile.label}" }
                            p { class: "dashboard-tile-value", "{tile.value}" }
                        }
                    }
                }
            }

            div { class: "dashboard-actions reveal",
                Card { class: "dashboard-action",
                    CardHeader {
                        div {
                            CardTitle { "View All Bookings" }
                            CardDescription { "Access and manage all your transportation bookings in one place." }
                        }
                        span { class: "dashboard-action-badge", "data-tone": "accent",
                            GlyphIcon { glyph: Glyph::Package, size: 28 }
                        }
                    }
                    CardContent {
                        ul { class: "dashboard-feature-list",
                            FeatureItem { glyph: Glyph::Clock, "Track delivery status" }
                            FeatureItem { glyph: Glyph::MapPin, "View pickup & delivery locations" }
                            FeatureItem { glyph: Glyph::Truck, "Monitor vehicle assignments" }
                        }
                    }
                    CardFooter {
                        Button {
                            variant: ButtonVariant::Primary,
                            block: true,
                            onclick: go(BOOKINGS_PATH),
                            "View Bookings"
                            span { class: "dashboard-arrow", "\u{2192}" }
                        }
                    }
                }

                Card { class: "dashboard-action",
                    CardHeader {
                        div {
                            CardTitle { "Create New Booking" }
                            CardDescription { "Schedule a new transportation service for your delivery needs." }
                        }
                        span { class: "dashboard-action-badge", "data-tone": "success",
                            GlyphIcon { glyph: Glyph::Plus, size: 28 }
                        }
                    }
                    CardContent {
                        ul { class: "dashboard-feature-list",
                            FeatureItem { glyph: Glyph::MapPin, "Set pickup & delivery points" }
                            FeatureItem { glyph: Glyph::Truck, "Choose vehicle type" }
                            FeatureItem { glyph: Glyph::Clock, "Get instant cost estimates" }
                        }
                    }
                    CardFooter {
                        Button {
                            variant: ButtonVariant::Success,
                            block: true,
                            onclick: go(NEW_BOOKING_PATH),
                            "Create Booking"
                            span { class: "dashboard-arrow", "\u{2192}" }
                        }
                    }
                }
            }

            section { class: "dashboard-highlights reveal",
                h2 { class: "dashboard-section-title", "Why Choose Our Platform?" }
                div { class: "dashboard-highlight-grid",
                    for highlight in PLATFORM_HIGHLIGHTS.iter() {
                        div { class: "dashboard-highlight",
                            div { class: "dashboard-highlight-icon",
                                GlyphIcon { glyph: highlight.glyph, size: 24 }
                            }
                            h3 { "{highlight.title}" }
                            p { "{highlight.body}" }
                        }
                    }
                }
            }
        }
    }
}

/// Initials badge plus the dropdown panel with the user's details.
#[component]
fn ProfileMenu(
    user: UserRecord,
    open: bool,
    on_toggle: EventHandler<MouseEvent>,
    on_logout: EventHandler<MouseEvent>,
) -> Element {
    let initials = user.initials();
    let name = user.name.as_deref().unwrap_or("User");

    rsx! {
        div { class: "profile",
            button {
                id: PROFILE_TRIGGER_ID,
                class: "profile-trigger",
                r#type: "button",
                title: "User Profile",
                aria_expanded: open,
                onclick: move |evt| on_toggle.call(evt),
                "{initials}"
            }
            if open {
                div { id: PROFILE_PANEL_ID, class: "profile-panel",
                    h2 { class: "profile-name", "{name}" }
                    dl { class: "profile-details",
                        div {
                            dt { "Email" }
                            dd { "{field_or_dash(&user.email)}" }
                        }
                        div {
                            dt { "Phone" }
                            dd { "{field_or_dash(&user.phone)}" }
                        }
                        div {
                            dt { "Role" }
                            dd { "{field_or_dash(&user.role)}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        block: true,
                        onclick: move |evt| on_logout.call(evt),
                        "Logout"
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureItem(glyph: Glyph, children: Element) -> Element {
    rsx! {
        li { class: "dashboard-feature",
            GlyphIcon { glyph, size: 16 }
            span { {children} }
        }
    }
}

#[component]
fn GlyphIcon(glyph: Glyph, size: u32) -> Element {
    match glyph {
        Glyph::Clock => rsx! { Icon { icon: LdClock, width: size, height: size } },
        Glyph::MapPin => rsx! { Icon { icon: LdMapPin, width: size, height: size } },
        Glyph::Package => rsx! { Icon { icon: LdPackage, width: size, height: size } },
        Glyph::Plus => rsx! { Icon { icon: LdPlus, width: size, height: size } },
        Glyph::Truck => rsx! { Icon { icon: LdTruck, width: size, height: size } },
        Glyph::User => rsx! { Icon { icon: LdUser, width: size, height: size } },
    }
}
