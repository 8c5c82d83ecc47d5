//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is one request and one response. Non-2xx responses become
//! [`ApiError::Status`] carrying the server's `error`/`message` text when the
//! body has one, or the caller's fallback text otherwise. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::{
    ChatMessage, GradingReport, LessonPlan, LessonPlanExport, LoginResponse, MessageResponse, Role,
    SignupRequest,
};
#[cfg(feature = "hydrate")]
use super::types::{GradeRequest, LessonPlanRequest, LoginRequest, TutorChatRequest, TutorChatResponse};

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const SIGNUP_FAILED: &str = "Registration failed. Please try again.";
pub const DELETE_ACCOUNT_FAILED: &str = "Failed to delete account.";
pub const TUTOR_FAILED: &str = "Failed to get a response from the AI tutor.";
pub const LESSON_PLAN_FAILED: &str = "Failed to generate lesson plan. Please try again.";
pub const LESSON_PDF_FAILED: &str = "Failed to export lesson plan PDF.";
pub const GRADING_FAILED: &str = "Failed to grade assignments. Please try again.";
pub const GRADES_PDF_FAILED: &str = "Failed to export grading report.";

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text to show the user: the server's message when one came back,
    /// `fallback` for transport and decode failures.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Build the error for a non-2xx response from its raw body text.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.text().map(str::to_owned))
        .unwrap_or_else(|| fallback.to_owned());
    ApiError::Status { status, message }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response, fallback: &str) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = status_error(status, &body, fallback);
    log::warn!("{} -> {status}: {err}", resp.url());
    Err(err)
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B, fallback: &str) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = check(resp, fallback).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_binary<B: serde::Serialize>(url: &str, body: &B, fallback: &str) -> Result<Vec<u8>, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = check(resp, fallback).await?;
    resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server rejects it.
pub async fn login(email: &str, password: &str, role: Role) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned(), role };
        post_json("/api/auth/login", &body, LOGIN_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, role);
        Err(ApiError::Unavailable)
    }
}

/// Register via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server rejects it.
pub async fn signup(form: &SignupRequest) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/signup", form, SIGNUP_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Unavailable)
    }
}

/// Delete the signed-in account via `DELETE /api/auth/delete_account`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server rejects it.
pub async fn delete_account(token: &str) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete("/api/auth/delete_account")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check(resp, DELETE_ACCOUNT_FAILED).await?;
        resp.json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Send a conversation to `POST /api/groq/chat` and return the reply text.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server rejects it.
pub async fn tutor_chat(messages: Vec<ChatMessage>) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = TutorChatRequest { messages };
        let resp: TutorChatResponse = post_json("/api/groq/chat", &body, TUTOR_FAILED).await?;
        Ok(resp.content)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = messages;
        Err(ApiError::Unavailable)
    }
}

/// Ask `POST /api/generate-lesson-plan` for a plan.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server rejects it.
pub async fn generate_lesson_plan(topic: &str, grade: &str, duration: &str) -> Result<LessonPlan, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LessonPlanRequest {
            topic: topic.to_owned(),
            grade: grade.to_owned(),
            duration: duration.to_owned(),
        };
        post_json("/api/generate-lesson-plan", &body, LESSON_PLAN_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (topic, grade, duration);
        Err(ApiError::Unavailable)
    }
}

/// Render a plan to PDF via `POST /api/export-lesson-plan-pdf`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server rejects it.
pub async fn export_lesson_plan_pdf(export: &LessonPlanExport) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_binary("/api/export-lesson-plan-pdf", export, LESSON_PDF_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = export;
        Err(ApiError::Unavailable)
    }
}

/// Grade pasted answers via `POST /api/grade-assignments`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server rejects it.
pub async fn grade_assignments(manual_answers: &str, rubric: &str) -> Result<GradingReport, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = GradeRequest { manual_answers: manual_answers.to_owned(), rubric: rubric.to_owned() };
        post_json("/api/grade-assignments", &body, GRADING_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (manual_answers, rubric);
        Err(ApiError::Unavailable)
    }
}

/// Render a grading report to PDF via `POST /api/export-pdf`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server rejects it.
pub async fn export_grades_pdf(report: &GradingReport) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_binary("/api/export-pdf", report, GRADES_PDF_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = report;
        Err(ApiError::Unavailable)
    }
}
