use super::*;
use axum::http::HeaderValue;

fn form(name: &str, email: &str, password: &str) -> SignupForm {
    SignupForm {
        name: Some(name.into()),
        email: Some(email.into()),
        password: Some(password.into()),
        role: Some(Role::Student),
        grade: None,
    }
}

// =============================================================================
// register
// =============================================================================

#[test]
fn register_accepts_complete_form() {
    assert_eq!(register(&form("Ada", "ada@example.com", "pw")), Ok(SIGNUP_MESSAGE));
}

#[test]
fn register_rejects_blank_or_missing_fields() {
    assert_eq!(register(&form("", "ada@example.com", "pw")), Err(AuthError::MissingFields));
    assert_eq!(register(&form("Ada", "ada@example.com", "  ")), Err(AuthError::MissingFields));
    assert_eq!(register(&SignupForm::default()), Err(AuthError::MissingFields));
}

// =============================================================================
// demo_login
// =============================================================================

#[test]
fn name_from_email_takes_local_part() {
    assert_eq!(name_from_email("ada@example.com"), "ada");
    assert_eq!(name_from_email("plain"), "plain");
}

#[test]
fn demo_login_builds_verified_user() {
    let (user, token) = demo_login("grace@navy.mil", Some(Role::Teacher)).unwrap();
    assert_eq!(user.name, "grace");
    assert_eq!(user.email, "grace@navy.mil");
    assert_eq!(user.role, Role::Teacher);
    assert_eq!(user.grade.as_deref(), Some(DEMO_GRADE));
    assert!(user.is_verified);
    assert_eq!(user.level, 1);
    assert!(Uuid::parse_str(&user.id).is_ok());
    assert!(Uuid::parse_str(&token).is_ok());
}

#[test]
fn demo_login_defaults_to_student() {
    let (user, _) = demo_login("kid@school.test", None).unwrap();
    assert_eq!(user.role, Role::Student);
}

#[test]
fn demo_login_issues_distinct_tokens() {
    let (_, a) = demo_login("a@b.c", None).unwrap();
    let (_, b) = demo_login("a@b.c", None).unwrap();
    assert_ne!(a, b);
}

#[test]
fn demo_login_requires_email() {
    assert_eq!(demo_login("   ", None).unwrap_err(), AuthError::MissingEmail);
}

// =============================================================================
// bearer_token / delete_account
// =============================================================================

#[test]
fn bearer_token_parses_header() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc-123"));
    assert_eq!(bearer_token(&headers), Some("abc-123"));
    assert_eq!(delete_account(&headers), Ok(DELETE_MESSAGE));
}

#[test]
fn bearer_token_rejects_other_schemes_and_blank() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
    assert_eq!(bearer_token(&headers), None);
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer   "));
    assert_eq!(bearer_token(&headers), None);
}

#[test]
fn delete_account_without_header_is_unauthorized() {
    assert_eq!(delete_account(&HeaderMap::new()), Err(AuthError::MissingToken));
}
