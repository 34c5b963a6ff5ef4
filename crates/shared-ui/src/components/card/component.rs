use dioxus::prelude::*;

/// A bordered surface for grouping related content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

/// Title row of a card with an optional one-line description.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] description: Option<String>,
) -> Element {
    rsx! {
        header { class: "card-header",
            h3 { class: "card-title", "{title}" }
            if let Some(text) = description {
                p { class: "card-description", "{text}" }
            }
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        footer { class: "card-footer", {children} }
    }
}
