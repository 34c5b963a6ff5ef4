use dioxus::prelude::*;

/// Page title with an optional subtitle and trailing actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] actions: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                if let Some(text) = subtitle {
                    p { class: "page-subtitle", "{text}" }
                }
            }
            if let Some(actions) = actions {
                div { class: "page-actions", {actions} }
            }
        }
    }
}
