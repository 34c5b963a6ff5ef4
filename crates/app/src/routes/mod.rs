pub mod home;
pub mod not_found;
pub mod portal;
pub mod sign_in;
pub mod survey;

use crate::auth::use_auth;
use crate::guard::{AdminGuard, ClientGuard, EmployeeGuard};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdCalendar, LdFileText, LdLayoutDashboard, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    active_link, nav_links, AccessRequirement, FeatureFlags, NavIcon, Role, SchoolInfo,
};
use shared_ui::{Badge, BadgeTone, Button, ButtonVariant, SideNav, SideNavItem};

use home::Home;
use not_found::NotFound;
use sign_in::SignIn;
use survey::Survey;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PublicLayout)]
    #[route("/")]
    Home {},
    #[route("/survey")]
    Survey {},
    #[route("/auth?:redirect")]
    SignIn { redirect: Option<String> },
    #[end_layout]

    // ── Client portal ──
    #[redirect("/client-portal", || Route::ClientDashboard {})]
    #[layout(ClientGuard)]
    #[layout(PortalLayout)]
    #[route("/client-portal/dashboard")]
    ClientDashboard {},
    #[route("/client-portal/lessons")]
    ClientLessons {},
    #[route("/client-portal/progress")]
    ClientProgress {},
    #[route("/client-portal/:..rest")]
    ClientPortalMissing { rest: Vec<String> },
    #[end_layout]
    #[end_layout]

    // ── Employee portal ──
    #[redirect("/employee-portal", || Route::EmployeeDashboard {})]
    #[layout(EmployeeGuard)]
    #[layout(PortalLayout)]
    #[route("/employee-portal/dashboard")]
    EmployeeDashboard {},
    #[route("/employee-portal/schedule")]
    EmployeeSchedule {},
    #[route("/employee-portal/students")]
    EmployeeStudents {},
    #[route("/employee-portal/:..rest")]
    EmployeePortalMissing { rest: Vec<String> },
    #[end_layout]
    #[end_layout]

    // ── Admin portal ──
    #[redirect("/admin-portal", || Route::AdminDashboard {})]
    #[layout(AdminGuard)]
    #[layout(PortalLayout)]
    #[route("/admin-portal/dashboard")]
    AdminDashboard {},
    #[route("/admin-portal/staff")]
    AdminStaff {},
    #[route("/admin-portal/reports")]
    AdminReports {},
    #[route("/admin-portal/:..rest")]
    AdminPortalMissing { rest: Vec<String> },
    #[end_layout]
    #[end_layout]

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Landing route of a role's portal.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Client => Route::ClientDashboard {},
            Role::Employee => Route::EmployeeDashboard {},
            Role::Admin => Route::AdminDashboard {},
        }
    }

    /// The role whose portal this route belongs to, if any.
    pub fn portal_role(&self) -> Option<Role> {
        match self {
            Route::ClientDashboard {}
            | Route::ClientLessons {}
            | Route::ClientProgress {}
            | Route::ClientPortalMissing { .. } => Some(Role::Client),
            Route::EmployeeDashboard {}
            | Route::EmployeeSchedule {}
            | Route::EmployeeStudents {}
            | Route::EmployeePortalMissing { .. } => Some(Role::Employee),
            Route::AdminDashboard {}
            | Route::AdminStaff {}
            | Route::AdminReports {}
            | Route::AdminPortalMissing { .. } => Some(Role::Admin),
            Route::Home {} | Route::Survey {} | Route::SignIn { .. } | Route::NotFound { .. } => {
                None
            }
        }
    }

    /// Access requirement declared by this route.
    pub fn requirement(&self) -> AccessRequirement {
        self.portal_role()
            .map(AccessRequirement::only)
            .unwrap_or_else(AccessRequirement::public)
    }

    /// Resolve an in-app path. Unknown paths under a portal prefix stay in
    /// that portal; anything else unknown resolves to `NotFound`.
    pub fn from_path(path: &str) -> Self {
        path.parse().unwrap_or_else(|_| Route::NotFound {
            route: path
                .trim_start_matches('/')
                .split('/')
                .map(str::to_string)
                .collect(),
        })
    }
}

/// Top bar and footer around the public pages.
#[component]
fn PublicLayout() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let school: SchoolInfo = use_context();
    let role = auth.role();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "public-shell",
            header { class: "public-navbar",
                Link { to: Route::Home {}, class: "brand", "{school.name}" }
                nav { class: "public-links",
                    Link { to: Route::Home {}, "Home" }
                    if flags.survey {
                        Link { to: Route::Survey {}, "Survey" }
                    }
                }
                div { class: "public-actions",
                    if let Some(role) = role {
                        Link { to: Route::home_for(role), class: "button-link", "My portal" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| auth.sign_out(),
                            "Sign out"
                        }
                    } else {
                        Link { to: Route::SignIn { redirect: None }, class: "button-link", "Sign in" }
                    }
                }
            }

            main { class: "public-content",
                Outlet::<Route> {}
            }

            footer { class: "public-footer",
                span { "{school.name}" }
                if let Some(phone) = school.phone.clone() {
                    span { "{phone}" }
                }
                if let Some(email) = school.email.clone() {
                    a { href: "mailto:{email}", "{email}" }
                }
            }
        }
    }
}

/// Sidebar shell shared by every portal. Sits inside a guard layout, so a
/// session is present whenever this renders.
#[component]
fn PortalLayout() -> Element {
    let mut auth = use_auth();
    let route: Route = use_route();
    let path = route.to_string();

    let Some(session) = auth.session.read().clone() else {
        return rsx! {};
    };
    let role = session.role;
    let page_title = active_link(role, &path).map(|l| l.label).unwrap_or("Portal");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "portal-shell",
            SideNav {
                title: format!("{} portal", role.display_name()),
                footer: rsx! {
                    div { class: "portal-user",
                        span { class: "portal-avatar", "{session.initials()}" }
                        div {
                            div { class: "portal-user-name", "{session.display_name}" }
                            Badge { tone: BadgeTone::Accent, "{role.display_name()}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            auth.sign_out();
                            navigator().push(Route::Home {});
                        },
                        "Sign out"
                    }
                },
                for link in nav_links(role) {
                    SideNavItem { key: "{link.path}", active: link.path == path,
                        Link { to: Route::from_path(link.path),
                            NavGlyph { icon: link.icon }
                            "{link.label}"
                        }
                    }
                }
            }

            div { class: "portal-main",
                header { class: "portal-topbar",
                    span { class: "portal-title", "{page_title}" }
                    Link { to: Route::Home {}, class: "portal-site-link", "Public site" }
                }
                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        NavIcon::Progress => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        NavIcon::Students => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Staff => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        NavIcon::Reports => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
    }
}

// Portal route components

#[component]
fn ClientDashboard() -> Element {
    rsx! { portal::DashboardPage { role: Role::Client } }
}

#[component]
fn ClientLessons() -> Element {
    rsx! { portal::TablePage { table: shared_types::CLIENT_LESSONS } }
}

#[component]
fn ClientProgress() -> Element {
    rsx! { portal::TablePage { table: shared_types::CLIENT_PROGRESS } }
}

#[component]
fn ClientPortalMissing(rest: Vec<String>) -> Element {
    rsx! { portal::MissingPage { rest: rest } }
}

#[component]
fn EmployeeDashboard() -> Element {
    rsx! { portal::DashboardPage { role: Role::Employee } }
}

#[component]
fn EmployeeSchedule() -> Element {
    rsx! { portal::TablePage { table: shared_types::EMPLOYEE_SCHEDULE } }
}

#[component]
fn EmployeeStudents() -> Element {
    rsx! { portal::TablePage { table: shared_types::EMPLOYEE_STUDENTS } }
}

#[component]
fn EmployeePortalMissing(rest: Vec<String>) -> Element {
    rsx! { portal::MissingPage { rest: rest } }
}

#[component]
fn AdminDashboard() -> Element {
    rsx! { portal::DashboardPage { role: Role::Admin } }
}

#[component]
fn AdminStaff() -> Element {
    rsx! { portal::TablePage { table: shared_types::ADMIN_STAFF } }
}

#[component]
fn AdminReports() -> Element {
    rsx! { portal::TablePage { table: shared_types::ADMIN_REPORTS } }
}

#[component]
fn AdminPortalMissing(rest: Vec<String>) -> Element {
    rsx! { portal::MissingPage { rest: rest } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::guard::redirect_route;
    use shared_types::{decide, safe_return_path, AccessDecision, Session, ALL_ROLES};

    #[test]
    fn home_routes_match_role_home_paths() {
        for role in ALL_ROLES {
            let home = Route::home_for(*role);
            assert_eq!(home.to_string(), role.home_path());
            assert_eq!(Route::from_path(role.home_path()), home);
        }
    }

    #[test]
    fn every_nav_link_resolves_to_a_route_of_its_role() {
        for role in ALL_ROLES {
            for link in nav_links(*role) {
                let route = Route::from_path(link.path);
                assert!(
                    !matches!(route, Route::NotFound { .. }),
                    "{} has no route",
                    link.path
                );
                assert_eq!(route.portal_role(), Some(*role), "{}", link.path);
            }
        }
    }

    #[test]
    fn every_nav_link_is_reachable_by_its_role() {
        for role in ALL_ROLES {
            let session = Session::new("u@example.com", "U", *role);
            for link in nav_links(*role) {
                let route = Route::from_path(link.path);
                let decision = decide(false, Some(&session), &route.requirement(), link.path);
                assert!(decision.is_render(), "{role} blocked from {}", link.path);
            }
        }
    }

    #[test]
    fn portal_routes_reject_other_roles() {
        let session = Session::new("c@example.com", "C", Role::Client);
        let route = Route::AdminReports {};
        let decision = decide(false, Some(&session), &route.requirement(), "/admin-portal/reports");
        assert_eq!(redirect_route(&decision), Some(Route::home_for(Role::Client)));
    }

    #[test]
    fn unknown_portal_pages_stay_behind_that_portals_guard() {
        let route = Route::from_path("/admin-portal/xyz");
        assert_eq!(
            route,
            Route::AdminPortalMissing {
                rest: vec!["xyz".to_string()]
            }
        );
        assert_eq!(route.requirement(), AccessRequirement::only(Role::Admin));
        assert_eq!(route.to_string(), "/admin-portal/xyz");

        let client = Session::new("c@example.com", "C", Role::Client);
        let decision = decide(false, Some(&client), &route.requirement(), "/admin-portal/xyz");
        assert_eq!(redirect_route(&decision), Some(Route::ClientDashboard {}));
        let decision = decide(false, None, &route.requirement(), "/admin-portal/xyz");
        assert!(matches!(decision, AccessDecision::RedirectToSignIn { .. }));

        for (path, role) in [
            ("/client-portal/book", Role::Client),
            ("/employee-portal/a/b", Role::Employee),
        ] {
            assert_eq!(Route::from_path(path).portal_role(), Some(role), "{path}");
        }
    }

    #[test]
    fn known_portal_pages_win_over_the_portal_catch_all() {
        assert_eq!(Route::from_path("/admin-portal/staff"), Route::AdminStaff {});
        assert_eq!(Route::from_path("/client-portal/lessons"), Route::ClientLessons {});
    }

    #[test]
    fn public_routes_need_no_session() {
        for route in [Route::Home {}, Route::Survey {}, Route::SignIn { redirect: None }] {
            assert_eq!(route.requirement(), AccessRequirement::public());
            assert!(decide(false, None, &route.requirement(), "/").is_render());
        }
    }

    #[test]
    fn sign_in_route_lives_at_auth() {
        assert!(Route::SignIn { redirect: None }.to_string().starts_with("/auth"));
        assert!(Route::from_path("/auth").portal_role().is_none());
        assert!(matches!(Route::from_path("/auth"), Route::SignIn { .. }));
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        assert_eq!(
            Route::from_path("/nowhere/at-all"),
            Route::NotFound {
                route: vec!["nowhere".to_string(), "at-all".to_string()]
            }
        );
    }

    #[test]
    fn preserved_location_survives_sign_in_round_trip() {
        let requested = Route::EmployeeStudents {}.to_string();
        let kept = safe_return_path(Some(&requested)).unwrap();
        assert_eq!(Route::from_path(&kept), Route::EmployeeStudents {});
    }
}
