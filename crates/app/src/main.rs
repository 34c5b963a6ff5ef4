use dioxus::prelude::*;
use shared_types::DemoAuthenticator;

mod auth;
mod config;
mod guard;
mod routes;
use auth::{AuthService, AuthState};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let config = config::app_config();

    use_context_provider(|| config.features.clone());
    use_context_provider(|| config.school.clone());
    use_context_provider(|| AuthService::new(DemoAuthenticator::new(config.demo_accounts.clone())));
    let mut auth = use_context_provider(AuthState::new);

    // Nothing is persisted between visits, so restoring the session only
    // has to clear the loading flag once the app has mounted.
    use_effect(move || {
        tracing::info!(platform = client_platform(), "app mounted");
        auth.finish_loading();
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
