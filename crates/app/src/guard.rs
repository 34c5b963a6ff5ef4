use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{decide, AccessDecision, AccessRequirement, Role};
use shared_ui::LoadingPanel;

/// Route the app should move to for a redirecting decision.
pub fn redirect_route(decision: &AccessDecision) -> Option<Route> {
    match decision {
        AccessDecision::RedirectToSignIn { return_to } => Some(Route::SignIn {
            redirect: Some(return_to.clone()),
        }),
        AccessDecision::RedirectToHome { role } => Some(Route::home_for(*role)),
        AccessDecision::Loading | AccessDecision::Render => None,
    }
}

/// Wraps a view and only renders it when the current session satisfies
/// `requirement`. Otherwise shows a placeholder and redirects.
#[component]
pub fn ProtectedRoute(requirement: AccessRequirement, children: Element) -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let requested = route.to_string();

    let decision = decide(
        auth.is_loading(),
        auth.session.read().as_ref(),
        &requirement,
        &requested,
    );

    if let Some(target) = redirect_route(&decision) {
        tracing::info!(from = %requested, to = %target, "access guard redirect");
        navigator().replace(target);
    }

    rsx! {
        GuardOutcome { decision: decision, {children} }
    }
}

/// What the guard renders for a decision. Redirects render a short notice
/// for the frame before navigation lands.
#[component]
pub fn GuardOutcome(decision: AccessDecision, children: Element) -> Element {
    match decision {
        AccessDecision::Render => rsx! { {children} },
        AccessDecision::Loading => rsx! {
            LoadingPanel { message: "Checking your session..." }
        },
        AccessDecision::RedirectToSignIn { .. } => rsx! {
            LoadingPanel { message: "Redirecting to sign in..." }
        },
        AccessDecision::RedirectToHome { .. } => rsx! {
            LoadingPanel { message: "Redirecting to your portal..." }
        },
    }
}

/// Router layout guarding one role's portal.
#[component]
fn PortalGuard(role: Role) -> Element {
    rsx! {
        ProtectedRoute { requirement: AccessRequirement::only(role),
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn ClientGuard() -> Element {
    rsx! { PortalGuard { role: Role::Client } }
}

#[component]
pub fn EmployeeGuard() -> Element {
    rsx! { PortalGuard { role: Role::Employee } }
}

#[component]
pub fn AdminGuard() -> Element {
    rsx! { PortalGuard { role: Role::Admin } }
}
