use crate::common::demo_authenticator;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Authenticator, Role, SignInRequest, SignUpRequest};

fn sign_in(email: &str, password: &str) -> SignInRequest {
    SignInRequest {
        email: email.into(),
        password: password.into(),
    }
}

#[test]
fn test_demo_account_signs_in_with_its_role() {
    let auth = demo_authenticator();
    let session = auth.sign_in(&sign_in("Admin@DriveWise.test", "admin-demo-1")).unwrap();
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.display_name, "Alex Morgan");
}

#[test]
fn test_demo_account_with_wrong_password_is_rejected() {
    let err = demo_authenticator()
        .sign_in(&sign_in("instructor@drivewise.test", "wrong-password"))
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.friendly_message(), "Invalid email or password");
}

#[test]
fn test_other_emails_sign_in_as_clients() {
    let session = demo_authenticator()
        .sign_in(&sign_in("jane.doe@example.com", "whatever-123"))
        .unwrap();
    assert_eq!(session.role, Role::Client);
    assert_eq!(session.display_name, "Jane Doe");
}

#[test]
fn test_invalid_sign_in_form_reports_fields() {
    let err = demo_authenticator().sign_in(&sign_in("nope", "")).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_error("email").is_some());
    assert!(err.field_error("password").is_some());
}

#[test]
fn test_sign_up_creates_client_session() {
    let session = demo_authenticator()
        .sign_up(&SignUpRequest {
            display_name: "Eva Novak".into(),
            email: "eva@example.com".into(),
            phone: "0501234567".into(),
            password: "learner-pass".into(),
            confirm_password: "learner-pass".into(),
        })
        .unwrap();
    assert_eq!(session.role, Role::Client);
    assert_eq!(session.email, "eva@example.com");
    assert_eq!(session.phone.as_deref(), Some("0501234567"));
}

#[test]
fn test_sign_up_with_reserved_email_conflicts() {
    let err = demo_authenticator()
        .sign_up(&SignUpRequest {
            display_name: "Imposter".into(),
            email: "admin@drivewise.test".into(),
            phone: "0501234567".into(),
            password: "password-123".into(),
            confirm_password: "password-123".into(),
        })
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
}

#[test]
fn test_sign_up_password_mismatch() {
    let err = demo_authenticator()
        .sign_up(&SignUpRequest {
            display_name: "Tom Becker".into(),
            email: "tom@example.com".into(),
            phone: "0501234567".into(),
            password: "password-123".into(),
            confirm_password: "password-321".into(),
        })
        .unwrap_err();
    assert!(err.field_error("confirm_password").is_some());
}

#[test]
fn test_sign_up_follows_name_phone_and_password_rules() {
    let err = demo_authenticator()
        .sign_up(&SignUpRequest {
            display_name: "J".into(),
            email: "j@example.com".into(),
            phone: "555".into(),
            password: "12345".into(),
            confirm_password: "12345".into(),
        })
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    for field in ["display_name", "phone", "password"] {
        assert!(err.field_error(field).is_some(), "{field} accepted");
    }
}

#[test]
fn test_six_character_password_signs_in() {
    let session = demo_authenticator()
        .sign_in(&sign_in("kim@example.com", "abc123"))
        .unwrap();
    assert_eq!(session.role, Role::Client);
}
