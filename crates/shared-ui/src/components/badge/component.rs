use dioxus::prelude::*;

/// Colour of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Accent,
    Success,
    Warning,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Accent => "accent",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
        }
    }
}

/// Small inline label, e.g. the signed-in role.
#[component]
pub fn Badge(#[props(default)] tone: BadgeTone, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "badge", "data-tone": tone.class(), {children} }
    }
}
