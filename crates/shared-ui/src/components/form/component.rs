use dioxus::prelude::*;

/// A form wrapper that prevents default submission.
///
/// While `busy` the form is marked `aria-busy` and submit events are
/// swallowed, so a pending request can't be submitted a second time.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(default = false)] busy: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            "aria-busy": busy,
            onsubmit: move |evt| {
                evt.prevent_default();
                if !busy {
                    onsubmit.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}
