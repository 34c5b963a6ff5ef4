use dioxus::prelude::*;

/// Single-line text input. Pair with [`Field`](crate::Field) for a label
/// and an error message.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    /// Marks the input as failing validation.
    #[props(default = false)]
    invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            placeholder: placeholder,
            disabled: disabled,
            "aria-invalid": if invalid { "true" } else { "false" },
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}
