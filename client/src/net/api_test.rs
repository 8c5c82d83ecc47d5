use super::*;

#[test]
fn status_error_uses_error_field() {
    let err = status_error(400, r#"{"error":"Missing topic, grade, or duration"}"#, LESSON_PLAN_FAILED);
    assert_eq!(
        err,
        ApiError::Status { status: 400, message: "Missing topic, grade, or duration".to_owned() }
    );
}

#[test]
fn status_error_uses_message_field() {
    let err = status_error(401, r#"{"message":"Invalid credentials"}"#, LOGIN_FAILED);
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn status_error_falls_back_on_non_json_body() {
    let err = status_error(502, "<html>Bad Gateway</html>", TUTOR_FAILED);
    assert_eq!(err, ApiError::Status { status: 502, message: TUTOR_FAILED.to_owned() });
}

#[test]
fn user_message_prefers_server_text_for_status_errors() {
    let err = ApiError::Status { status: 500, message: "boom".to_owned() };
    assert_eq!(err.user_message(GRADING_FAILED), "boom");
}

#[test]
fn user_message_uses_fallback_for_transport_errors() {
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(GRADING_FAILED), GRADING_FAILED);
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message(LOGIN_FAILED), LOGIN_FAILED);
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

