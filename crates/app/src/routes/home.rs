use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{FeatureFlags, SchoolInfo};
use shared_ui::{Card, CardContent, CardHeader};

const OFFERINGS: &[(&str, &str)] = &[
    ("Car (B)", "Manual and automatic lessons from first drive to exam day."),
    ("Motorcycle (A)", "Closed-course basics, then supervised road riding."),
    ("Truck (C)", "Professional license training with our partner fleet."),
];

/// Public landing page.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let school: SchoolInfo = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        section { class: "hero",
            h1 { class: "hero-title", "{school.name}" }
            p { class: "hero-tagline", "{school.tagline}" }
            div { class: "hero-actions",
                if flags.survey {
                    Link { to: Route::Survey {}, class: "button-link primary", "Rate your lessons" }
                }
                if let Some(role) = auth.role() {
                    Link { to: Route::home_for(role), class: "button-link", "Go to my portal" }
                } else {
                    Link { to: Route::SignIn { redirect: None }, class: "button-link", "Sign in" }
                }
            }
        }

        section { class: "offerings",
            for (title, blurb) in OFFERINGS {
                Card { key: "{title}",
                    CardHeader { title: title.to_string() }
                    CardContent { p { "{blurb}" } }
                }
            }
        }
    }
}
