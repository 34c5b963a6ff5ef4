use crate::Role;

/// Icon shown next to a portal link. The UI layer maps these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Calendar,
    Progress,
    Students,
    Staff,
    Reports,
}

/// One entry in a portal sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

const CLIENT_LINKS: &[NavLink] = &[
    NavLink {
        label: "Dashboard",
        path: "/client-portal/dashboard",
        icon: NavIcon::Dashboard,
    },
    NavLink {
        label: "Lessons",
        path: "/client-portal/lessons",
        icon: NavIcon::Calendar,
    },
    NavLink {
        label: "Progress",
        path: "/client-portal/progress",
        icon: NavIcon::Progress,
    },
];

const EMPLOYEE_LINKS: &[NavLink] = &[
    NavLink {
        label: "Dashboard",
        path: "/employee-portal/dashboard",
        icon: NavIcon::Dashboard,
    },
    NavLink {
        label: "Schedule",
        path: "/employee-portal/schedule",
        icon: NavIcon::Calendar,
    },
    NavLink {
        label: "Students",
        path: "/employee-portal/students",
        icon: NavIcon::Students,
    },
];

const ADMIN_LINKS: &[NavLink] = &[
    NavLink {
        label: "Dashboard",
        path: "/admin-portal/dashboard",
        icon: NavIcon::Dashboard,
    },
    NavLink {
        label: "Staff",
        path: "/admin-portal/staff",
        icon: NavIcon::Staff,
    },
    NavLink {
        label: "Reports",
        path: "/admin-portal/reports",
        icon: NavIcon::Reports,
    },
];

/// Fixed link set per role. Adding a role means adding a row here.
pub const ROLE_NAVIGATION: &[(Role, &[NavLink])] = &[
    (Role::Client, CLIENT_LINKS),
    (Role::Employee, EMPLOYEE_LINKS),
    (Role::Admin, ADMIN_LINKS),
];

/// Sidebar links for `role`.
pub fn nav_links(role: Role) -> &'static [NavLink] {
    ROLE_NAVIGATION
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, links)| *links)
        .unwrap_or(&[])
}

/// The link of `role`'s set matching `path`, if any.
pub fn active_link(role: Role, path: &str) -> Option<&'static NavLink> {
    nav_links(role).iter().find(|link| link.path == path)
}
