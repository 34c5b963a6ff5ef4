use dioxus::prelude::*;

/// Full-width placeholder shown while something is not ready to render.
#[component]
pub fn LoadingPanel(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-panel", role: "status", "aria-live": "polite",
            span { class: "loading-spinner" }
            p { "{message}" }
        }
    }
}
