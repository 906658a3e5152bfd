use dioxus::prelude::*;

fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

/// Raised surface used for the dashboard tiles and panels.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("hub-card", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        article {
            ..merged,
            {children}
        }
    }
}

/// Header row of a Card: title block on the left, icon badge on the right.
#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("hub-card-header", attributes);
    rsx! { header { ..merged, {children} } }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("hub-card-title", attributes);
    rsx! { h3 { ..merged, {children} } }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("hub-card-description", attributes);
    rsx! { p { ..merged, {children} } }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("hub-card-content", attributes);
    rsx! { div { ..merged, {children} } }
}

/// Bottom row, usually holding the card's single call to action.
#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("hub-card-footer", attributes);
    rsx! { footer { ..merged, {children} } }
}
