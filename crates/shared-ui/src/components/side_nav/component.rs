use dioxus::prelude::*;

/// Vertical navigation column for portal layouts.
#[component]
pub fn SideNav(
    /// Heading shown above the links, usually the portal name.
    title: String,
    children: Element,
    #[props(default)] footer: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside { class: "side-nav",
            div { class: "side-nav-title", "{title}" }
            nav { class: "side-nav-links", {children} }
            if let Some(footer) = footer {
                div { class: "side-nav-footer", {footer} }
            }
        }
    }
}

/// Wraps one link in a `SideNav`; `active` highlights the current page.
#[component]
pub fn SideNavItem(#[props(default = false)] active: bool, children: Element) -> Element {
    rsx! {
        div {
            class: "side-nav-item",
            "data-active": if active { "true" } else { "false" },
            {children}
        }
    }
}
