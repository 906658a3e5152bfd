use crate::navigation::{navigate_or_log, Navigate};
use crate::routes::entrance_class;
use dioxus::prelude::*;
use shared_types::{EntrancePhase, ThemeMode};
use shared_ui::{use_theme_binding, Button, ButtonVariant, ThemeState, ThemeToggle};
use std::rc::Rc;

pub const ABOUT_PATH: &str = "/about";
pub const CONTACT_PATH: &str = "/contact";
pub const REGISTER_PATH: &str = "/register";
pub const LOGIN_PATH: &str = "/login";

/// Collaborators the landing page needs.
#[derive(Clone)]
pub struct LandingDeps {
    pub theme: Option<ThemeState>,
    pub navigator: Rc<dyn Navigate>,
}

impl PartialEq for LandingDeps {
    fn eq(&self, other: &Self) -> bool {
        self.theme == other.theme && Rc::ptr_eq(&self.navigator, &other.navigator)
    }
}

fn page_class(mode: ThemeMode, phase: EntrancePhase) -> String {
    format!("landing landing--{} {}", mode.as_str(), entrance_class(phase))
}

/// Public entry page: headline, tagline and the ways in.
#[component]
pub fn LandingView(deps: LandingDeps) -> Element {
    let theme = use_theme_binding(deps.theme);
    let mode = theme.mode();

    let mut phase = use_signal(EntrancePhase::default);
    use_effect(move || {
        let next = phase.peek().mounted();
        phase.set(next);
    });

    let navigator = deps.navigator;
    let go = |path: &'static str| {
        let navigator = navigator.clone();
        move |_: MouseEvent| navigate_or_log(navigator.as_ref(), path)
    };
    let follow = |path: &'static str| {
        let navigator = navigator.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            navigate_or_log(navigator.as_ref(), path);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: page_class(mode, phase()), "data-theme": mode.as_str(),
            div { class: "landing-backdrop" }
            div { class: "landing-overlay" }

            nav { class: "landing-nav reveal",
                a { class: "landing-pill", href: ABOUT_PATH, onclick: follow(ABOUT_PATH), "About Us" }
                a { class: "landing-pill", href: CONTACT_PATH, onclick: follow(CONTACT_PATH), "Contact" }
                ThemeToggle { theme }
            }

            main { class: "landing-hero",
                h1 { class: "landing-title reveal",
                    "Welcome to Our"
                    br {}
                    span { class: "landing-title-accent", "Logistics Platform" }
                }
                p { class: "landing-tagline reveal",
                    "Streamline your transportation needs with our comprehensive logistics solution. "
                    "Book, track, and manage your shipments with ease."
                }
                div { class: "landing-actions reveal",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: go(REGISTER_PATH),
                        "Register Now"
                        span { class: "landing-arrow", "\u{2192}" }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: go(LOGIN_PATH),
                        "Sign In"
                        span { class: "landing-arrow", "\u{2192}" }
                    }
                }
            }
        }
    }
}
