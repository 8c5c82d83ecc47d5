//! Auth routes: demo sign-up, sign-in, and account deletion.

use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use serde::Deserialize;

use edunexus_client::net::types::{LoginResponse, MessageResponse, Role};

use crate::routes::error::ApiError;
use crate::services::auth::{self as auth_svc, SignupForm};

/// `POST /api/auth/signup`: acknowledge a complete registration form.
pub async fn signup(Json(form): Json<SignupForm>) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let message = auth_svc::register(&form)?;
    tracing::info!(role = form.role.unwrap_or_default().as_str(), "demo signup");
    Ok((StatusCode::CREATED, Json(MessageResponse { message: message.to_string() })))
}

#[derive(Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: String,
    pub role: Option<Role>,
}

/// `POST /api/auth/login`: issue a demo user and token for the email.
pub async fn login(Json(body): Json<LoginBody>) -> Result<Json<LoginResponse>, ApiError> {
    let (user, token) = auth_svc::demo_login(&body.email, body.role)?;
    tracing::info!(user_id = %user.id, role = user.role.as_str(), "demo login");
    Ok(Json(LoginResponse { message: auth_svc::LOGIN_MESSAGE.to_string(), user, token }))
}

/// `DELETE /api/auth/delete_account`: requires a bearer token.
pub async fn delete_account(headers: HeaderMap) -> Result<Json<MessageResponse>, ApiError> {
    let message = auth_svc::delete_account(&headers)?;
    tracing::info!("demo account deletion acknowledged");
    Ok(Json(MessageResponse { message: message.to_string() }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
