use shared_types::{AccessRequirement, DemoAccount, DemoAuthenticator, Role, Session, ALL_ROLES};

/// Paths the guard is asked about in the exhaustive tests.
pub const REQUESTED_PATHS: &[&str] = &[
    "/",
    "/survey",
    "/client-portal/dashboard",
    "/client-portal/lessons?week=46",
    "/employee-portal/schedule",
    "/admin-portal/reports",
];

pub fn session(role: Role) -> Session {
    Session::new(
        format!("{}@drivewise.test", role.as_str()),
        format!("Test {}", role.display_name()),
        role,
    )
}

/// Every session state: absent plus one per role.
pub fn all_sessions() -> Vec<Option<Session>> {
    std::iter::once(None)
        .chain(ALL_ROLES.iter().map(|r| Some(session(*r))))
        .collect()
}

/// Every role subset as a restriction, plus public and any-authenticated.
pub fn all_requirements() -> Vec<AccessRequirement> {
    let mut out = vec![AccessRequirement::public(), AccessRequirement::authenticated()];
    for mask in 0u8..(1 << ALL_ROLES.len()) {
        let roles: Vec<Role> = ALL_ROLES
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, r)| *r)
            .collect();
        out.push(AccessRequirement::roles(&roles));
    }
    out
}

pub fn demo_authenticator() -> DemoAuthenticator {
    DemoAuthenticator::new(vec![
        DemoAccount {
            email: "admin@drivewise.test".into(),
            password: "admin-demo-1".into(),
            role: Role::Admin,
            display_name: "Alex Morgan".into(),
        },
        DemoAccount {
            email: "instructor@drivewise.test".into(),
            password: "instructor-demo-1".into(),
            role: Role::Employee,
            display_name: "Marco Rossi".into(),
        },
    ])
}
