use dioxus::prelude::*;

/// A bordered card container.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Section heading inside a Card.
#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Inline status message shown at the top of a card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CardNoticeTone {
    #[default]
    Success,
    Error,
}

#[component]
pub fn CardNotice(#[props(default)] tone: CardNoticeTone, children: Element) -> Element {
    let tone = match tone {
        CardNoticeTone::Success => "success",
        CardNoticeTone::Error => "error",
    };

    rsx! {
        div { class: "card-notice", "data-tone": tone, role: "status", {children} }
    }
}
