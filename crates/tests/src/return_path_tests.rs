use pretty_assertions::assert_eq;
use shared_types::{decide, safe_return_path, AccessDecision, AccessRequirement, Role};

#[test]
fn test_sign_in_redirect_preserves_requested_location() {
    let decision = decide(false, None, &AccessRequirement::only(Role::Employee), "/employee-portal/students");
    let AccessDecision::RedirectToSignIn { return_to } = decision else {
        panic!("expected a sign-in redirect, got {decision:?}");
    };
    assert_eq!(safe_return_path(Some(&return_to)).as_deref(), Some("/employee-portal/students"));
}

#[test]
fn test_query_string_is_kept_in_return_location() {
    let decision = decide(false, None, &AccessRequirement::authenticated(), "/client-portal/lessons?week=46");
    assert_eq!(
        decision,
        AccessDecision::RedirectToSignIn {
            return_to: "/client-portal/lessons?week=46".to_string()
        }
    );
    assert_eq!(
        safe_return_path(Some("/client-portal/lessons?week=46")).as_deref(),
        Some("/client-portal/lessons?week=46")
    );
}

#[test]
fn test_foreign_locations_are_dropped() {
    for candidate in [
        "https://evil.example/",
        "//evil.example/path",
        "/\\evil.example",
        "javascript:alert(1)",
        "",
    ] {
        assert_eq!(safe_return_path(Some(candidate)), None, "{candidate}");
    }
}

#[test]
fn test_sign_in_view_is_not_a_return_location() {
    assert_eq!(safe_return_path(Some("/auth")), None);
    assert_eq!(safe_return_path(Some("/auth?redirect=%2F")), None);
    assert_eq!(safe_return_path(Some("/authors")), Some("/authors".to_string()));
}
