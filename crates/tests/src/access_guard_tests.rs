use crate::common::{all_requirements, all_sessions, session, REQUESTED_PATHS};
use pretty_assertions::assert_eq;
use shared_types::{decide, AccessDecision, AccessRequirement, Role, ALL_ROLES};

#[test]
fn test_absent_session_on_protected_view_redirects_to_auth() {
    let decision = decide(false, None, &AccessRequirement::authenticated(), "/client-portal/dashboard");
    assert_eq!(
        decision,
        AccessDecision::RedirectToSignIn {
            return_to: "/client-portal/dashboard".to_string()
        }
    );
    assert!(!decision.is_render());
}

#[test]
fn test_client_on_admin_view_goes_to_client_dashboard() {
    let decision = decide(
        false,
        Some(&session(Role::Client)),
        &AccessRequirement::only(Role::Admin),
        "/admin-portal/dashboard",
    );
    assert_eq!(decision, AccessDecision::RedirectToHome { role: Role::Client });
    assert_eq!(Role::Client.home_path(), "/client-portal/dashboard");
}

#[test]
fn test_admin_on_admin_view_renders() {
    let decision = decide(
        false,
        Some(&session(Role::Admin)),
        &AccessRequirement::only(Role::Admin),
        "/admin-portal/dashboard",
    );
    assert_eq!(decision, AccessDecision::Render);
}

#[test]
fn test_loading_always_yields_placeholder() {
    for s in all_sessions() {
        for req in all_requirements() {
            for path in REQUESTED_PATHS {
                assert_eq!(decide(true, s.as_ref(), &req, path), AccessDecision::Loading);
            }
        }
    }
}

#[test]
fn test_protected_view_without_session_never_renders() {
    for req in all_requirements().into_iter().filter(|r| r.requires_auth) {
        for path in REQUESTED_PATHS {
            assert_eq!(
                decide(false, None, &req, path),
                AccessDecision::RedirectToSignIn {
                    return_to: path.to_string()
                }
            );
        }
    }
}

#[test]
fn test_role_outside_restriction_goes_to_own_home() {
    for req in all_requirements() {
        let Some(allowed) = req.allowed_roles.clone() else {
            continue;
        };
        for role in ALL_ROLES.iter().filter(|r| !allowed.contains(r)) {
            let decision = decide(false, Some(&session(*role)), &req, "/admin-portal/staff");
            assert_eq!(decision, AccessDecision::RedirectToHome { role: *role });
        }
    }
}

#[test]
fn test_unrestricted_view_renders_for_any_session() {
    for role in ALL_ROLES {
        for req in [AccessRequirement::public(), AccessRequirement::authenticated()] {
            assert!(decide(false, Some(&session(*role)), &req, "/survey").is_render());
        }
    }
}

#[test]
fn test_never_renders_protected_view_for_unpermitted_session() {
    for s in all_sessions() {
        for req in all_requirements() {
            for path in REQUESTED_PATHS {
                if !decide(false, s.as_ref(), &req, path).is_render() {
                    continue;
                }
                if req.requires_auth {
                    let role = s.as_ref().map(|s| s.role).expect("rendered without session");
                    assert!(req.permits(role), "{role} rendered {path} under {req:?}");
                }
            }
        }
    }
}

#[test]
fn test_decision_is_stable_for_same_inputs() {
    for s in all_sessions() {
        for req in all_requirements() {
            let first = decide(false, s.as_ref(), &req, "/client-portal/progress");
            let second = decide(false, s.as_ref(), &req, "/client-portal/progress");
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_empty_role_set_admits_nobody() {
    let req = AccessRequirement::roles(&[]);
    for role in ALL_ROLES {
        assert_eq!(
            decide(false, Some(&session(*role)), &req, "/"),
            AccessDecision::RedirectToHome { role: *role }
        );
    }
}
