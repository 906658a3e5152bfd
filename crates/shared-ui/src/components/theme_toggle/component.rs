use crate::theme::ThemeState;
use dioxus::prelude::*;

/// Round sun/moon button that flips the theme it is given.
#[component]
pub fn ThemeToggle(
    theme: ThemeState,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mode = theme.mode();
    let base = vec![
        Attribute::new("class", "hub-theme-toggle", None, false),
        Attribute::new("data-mode", mode.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let glyph = if mode.is_dark() { "\u{2600}\u{fe0f}" } else { "\u{1f319}" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            aria_label: "Toggle theme",
            onclick: move |_| theme.toggle(),
            ..merged,
            span { class: "hub-theme-toggle-glyph", "{glyph}" }
        }
    }
}
