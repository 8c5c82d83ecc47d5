//! Demo-mode account service.
//!
//! DESIGN
//! ======
//! There is no user store. Sign-up acknowledges any complete form, sign-in
//! mints a fresh verified user from the submitted email, and account deletion
//! only checks that a bearer token was presented.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use uuid::Uuid;

use edunexus_client::net::types::{Role, User};

pub const SIGNUP_MESSAGE: &str = "Registration successful. (Demo Mode)";
pub const LOGIN_MESSAGE: &str = "Login successful (Demo Mode)";
pub const DELETE_MESSAGE: &str = "Account successfully deleted.";
pub const DEMO_GRADE: &str = "N/A";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Email is required")]
    MissingEmail,
    #[error("Missing or invalid authorization token.")]
    MissingToken,
}

/// Sign-up form fields as received; any of them may be absent.
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct SignupForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub grade: Option<String>,
}

fn present(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Accept a sign-up when name, email and password are all non-blank.
///
/// # Errors
///
/// [`AuthError::MissingFields`] when any required field is absent or blank.
pub fn register(form: &SignupForm) -> Result<&'static str, AuthError> {
    if !(present(form.name.as_ref()) && present(form.email.as_ref()) && present(form.password.as_ref())) {
        return Err(AuthError::MissingFields);
    }
    Ok(SIGNUP_MESSAGE)
}

/// `ada@example.com` -> `ada`. An address without `@` is used whole.
#[must_use]
pub fn name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Mint a demo user and session token for `email`.
///
/// # Errors
///
/// [`AuthError::MissingEmail`] when the email is blank.
pub fn demo_login(email: &str, role: Option<Role>) -> Result<(User, String), AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::MissingEmail);
    }
    let user = User {
        id: Uuid::new_v4().to_string(),
        name: name_from_email(email).to_string(),
        email: email.to_string(),
        role: role.unwrap_or_default(),
        grade: Some(DEMO_GRADE.to_string()),
        photo: None,
        is_verified: true,
        xp: 0,
        level: 1,
        badges: Vec::new(),
    };
    Ok((user, Uuid::new_v4().to_string()))
}

/// Token from an `Authorization: Bearer <token>` header.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Acknowledge an account deletion for the presented token.
///
/// # Errors
///
/// [`AuthError::MissingToken`] without a bearer token.
pub fn delete_account(headers: &HeaderMap) -> Result<&'static str, AuthError> {
    bearer_token(headers).ok_or(AuthError::MissingToken)?;
    Ok(DELETE_MESSAGE)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
