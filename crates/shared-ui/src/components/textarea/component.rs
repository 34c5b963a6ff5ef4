use dioxus::prelude::*;

/// Multi-line text input with an optional character counter.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] max_len: Option<usize>,
    #[props(default = false)] invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let used = value.chars().count();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            textarea {
                value: value.clone(),
                placeholder: placeholder,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(max) = max_len {
                span {
                    class: if used > max { "textarea-counter over" } else { "textarea-counter" },
                    "{used} / {max}"
                }
            }
        }
    }
}
