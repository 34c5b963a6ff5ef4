use dioxus::prelude::*;

/// Native `<select>` over a fixed list of `(value, label)` options.
///
/// When `placeholder` is set, an empty first option is rendered so the
/// form can tell "not chosen yet" apart from a real choice.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    options: Vec<(String, String)>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] onchange: Option<EventHandler<FormEvent>>,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "form-select", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        select {
            value: value.clone(),
            disabled: disabled,
            "aria-invalid": if invalid { "true" } else { "false" },
            onchange: move |evt| {
                if let Some(handler) = &onchange {
                    handler.call(evt);
                }
            },
            ..merged,
            if let Some(text) = placeholder {
                option { value: "", selected: value.is_empty(), "{text}" }
            }
            for (key, text) in options {
                option {
                    key: "{key}",
                    value: "{key}",
                    selected: key == value,
                    "{text}"
                }
            }
        }
    }
}
