use super::*;
use crate::net::types::User;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role,
        grade: None,
        photo: None,
        is_verified: true,
        xp: 0,
        level: 1,
        badges: Vec::new(),
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = SessionState { user: None, token: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = SessionState { user: None, token: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = SessionState { user: Some(user(Role::Student)), token: None, loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn wrong_role_detects_teacher_on_student_route() {
    let state = SessionState { user: Some(user(Role::Teacher)), token: None, loading: false };
    assert_eq!(wrong_role(&state, Role::Student), Some(Role::Teacher));
    assert_eq!(wrong_role(&state, Role::Teacher), None);
}
