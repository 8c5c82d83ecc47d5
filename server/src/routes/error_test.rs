use super::*;
use crate::llm::types::LlmError;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn not_configured_renders_503_with_error_field() {
    let response = ApiError::NotConfigured.into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await, serde_json::json!({ "error": AI_NOT_CONFIGURED }));
}

#[test]
fn ai_errors_map_to_statuses() {
    let bad = ApiError::from_ai(AiError::EmptyConversation, "llm", "json");
    assert_eq!(bad, ApiError::BadRequest("No messages provided".into()));

    let llm = ApiError::from_ai(AiError::Llm(LlmError::ApiRequest("down".into())), "llm", "json");
    assert_eq!(llm, ApiError::Internal("llm".into()));
    assert_eq!(llm.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let invalid = ApiError::from_ai(AiError::InvalidJson("eof".into()), "llm", "json");
    assert_eq!(invalid, ApiError::Internal("json".into()));

    assert_eq!(ApiError::from_ai(AiError::LlmNotConfigured, "llm", "json"), ApiError::NotConfigured);
}

#[test]
fn auth_errors_map_to_statuses() {
    assert_eq!(ApiError::from(AuthError::MissingFields).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::from(AuthError::MissingToken).status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn pdf_errors_hide_details() {
    let err = ApiError::from(PdfError::Save("disk".into()));
    assert_eq!(err, ApiError::Internal(PDF_FAILED.into()));
}
