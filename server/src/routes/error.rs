//! JSON error responses shared by the API routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use edunexus_client::net::types::ErrorBody;

use crate::services::ai::AiError;
use crate::services::auth::AuthError;
use crate::services::pdf::PdfError;

pub const AI_NOT_CONFIGURED: &str = "AI features are not configured.";
pub const INTERNAL_ERROR: &str = "An internal server error occurred.";
pub const PDF_FAILED: &str = "An error occurred during PDF generation.";

/// Route-level failure rendered as `{"error": "..."}`.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("AI features are not configured.")]
    NotConfigured,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map an AI failure. `llm_failed` is shown when the provider call fails,
    /// `invalid_output` when the model reply cannot be decoded.
    #[must_use]
    pub fn from_ai(err: AiError, llm_failed: &str, invalid_output: &str) -> Self {
        match err {
            AiError::LlmNotConfigured => Self::NotConfigured,
            AiError::EmptyConversation => Self::BadRequest("No messages provided".into()),
            AiError::MissingFields(message) => Self::BadRequest(message.into()),
            AiError::Llm(e) => {
                tracing::error!(error = %e, "llm call failed");
                Self::Internal(llm_failed.into())
            }
            AiError::InvalidJson(e) => {
                tracing::error!(error = %e, "llm reply rejected");
                Self::Internal(invalid_output.into())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingFields | AuthError::MissingEmail => Self::BadRequest(err.to_string()),
            AuthError::MissingToken => Self::Unauthorized(err.to_string()),
        }
    }
}

impl From<PdfError> for ApiError {
    fn from(err: PdfError) -> Self {
        tracing::error!(error = %err, "pdf export failed");
        Self::Internal(PDF_FAILED.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: Some(self.to_string()), message: None };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
