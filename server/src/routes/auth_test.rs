use super::*;
use axum::http::HeaderValue;
use axum::http::header::AUTHORIZATION;

#[tokio::test]
async fn signup_returns_created() {
    let form = SignupForm {
        name: Some("Ada".into()),
        email: Some("ada@example.com".into()),
        password: Some("secret".into()),
        role: Some(Role::Teacher),
        grade: None,
    };
    let (status, Json(body)) = signup(Json(form)).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.message, auth_svc::SIGNUP_MESSAGE);
}

#[tokio::test]
async fn signup_missing_fields_is_bad_request() {
    let err = signup(Json(SignupForm::default())).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_echoes_role_and_email() {
    let body = LoginBody { email: "sam@school.test".into(), role: Some(Role::Teacher) };
    let Json(resp) = login(Json(body)).await.unwrap();
    assert_eq!(resp.user.name, "sam");
    assert_eq!(resp.user.role, Role::Teacher);
    assert!(!resp.token.is_empty());
}

#[tokio::test]
async fn login_without_email_is_bad_request() {
    let body = LoginBody { email: String::new(), role: None };
    let err = login(Json(body)).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn login_body_accepts_client_payload() {
    let body: LoginBody =
        serde_json::from_str(r#"{"email":"a@b.c","password":"pw","role":"student"}"#).unwrap();
    assert_eq!(body.email, "a@b.c");
    assert_eq!(body.role, Some(Role::Student));
}

#[tokio::test]
async fn delete_account_requires_bearer() {
    let err = delete_account(HeaderMap::new()).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer token-1"));
    let Json(body) = delete_account(headers).await.unwrap();
    assert_eq!(body.message, auth_svc::DELETE_MESSAGE);
}
