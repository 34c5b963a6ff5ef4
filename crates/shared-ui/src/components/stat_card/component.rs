use dioxus::prelude::*;

/// Headline figure with a label and a muted detail line.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] detail: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            span { class: "stat-card-label", "{label}" }
            strong { class: "stat-card-value", "{value}" }
            if !detail.is_empty() {
                span { class: "stat-card-detail", "{detail}" }
            }
        }
    }
}

/// Responsive grid of `StatCard`s.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
