use dioxus::prelude::*;

/// A single-line input.
///
/// `name`, `required`, `min` and `step` are forwarded to the `<input>` so the
/// browser's native constraint validation runs before a form submits.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] name: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(default)] min: Option<String>,
    #[props(default)] step: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            input {
                r#type: "{input_type}",
                name: name,
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                required: required,
                min: min,
                step: step,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}
