use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Form row: label, control, and an inline validation message.
#[component]
pub fn Field(
    label: String,
    /// `id` of the control the label points at.
    html_for: String,
    #[props(default)] error: Option<String>,
    #[props(default)] hint: Option<String>,
    children: Element,
) -> Element {
    let hint = if error.is_some() { None } else { hint };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field",
            prim::Label { html_for: html_for, class: "field-label", "{label}" }
            {children}
            if let Some(err) = error {
                p { class: "field-error", role: "alert", "{err}" }
            }
            if let Some(text) = hint {
                p { class: "field-hint", "{text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_replaces_hint() {
        let html = dioxus_ssr::render_element(rsx! {
            Field {
                label: "Phone",
                html_for: "phone",
                error: "Phone number looks wrong".to_string(),
                hint: "Optional".to_string(),
                input { id: "phone" }
            }
        });
        assert!(html.contains("Phone number looks wrong"));
        assert!(!html.contains("Optional"));
    }

    #[test]
    fn hint_shown_without_error() {
        let html = dioxus_ssr::render_element(rsx! {
            Field { label: "Phone", html_for: "phone", hint: "Optional".to_string(),
                input { id: "phone" }
            }
        });
        assert!(html.contains("Optional"));
        assert!(!html.contains("role=\"alert\""));
    }
}
