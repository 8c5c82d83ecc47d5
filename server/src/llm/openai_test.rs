use super::*;

// ===== request building =====

#[test]
fn request_includes_sampling_options() {
    let messages = vec![Message::user("hi")];
    let options = ChatOptions { temperature: 0.7, max_tokens: Some(1024), json_mode: false };
    let json = serde_json::to_value(build_request("llama-3.1-8b-instant", options, &messages)).unwrap();
    assert_eq!(json["model"], "llama-3.1-8b-instant");
    assert_eq!(json["max_tokens"], 1024);
    assert_eq!(json["stream"], false);
    assert_eq!(json["messages"][0]["role"], "user");
    assert!(json.get("response_format").is_none());
    assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
}

#[test]
fn json_mode_sets_response_format() {
    let messages = vec![Message::user("plan")];
    let options = ChatOptions { temperature: 0.5, max_tokens: None, json_mode: true };
    let json = serde_json::to_value(build_request("m", options, &messages)).unwrap();
    assert_eq!(json["response_format"], serde_json::json!({ "type": "json_object" }));
    assert!(json.get("max_tokens").is_none());
}

// ===== response parsing =====

#[test]
fn parse_text_response() {
    let json = serde_json::json!({
        "model": "llama-3.1-8b-instant",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Hello!" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.content, "Hello!");
    assert_eq!(resp.model, "llama-3.1-8b-instant");
    assert_eq!(resp.finish_reason, "stop");
    assert_eq!(resp.input_tokens, 10);
    assert_eq!(resp.output_tokens, 5);
}

#[test]
fn parse_tolerates_missing_usage() {
    let json = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": "ok" } }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.content, "ok");
    assert_eq!(resp.input_tokens, 0);
    assert_eq!(resp.finish_reason, "stop");
}

#[test]
fn parse_missing_choices_is_error() {
    let json = serde_json::json!({ "model": "m", "choices": [] }).to_string();
    assert!(matches!(parse_chat_completions_response(&json), Err(LlmError::ApiParse(_))));
}

#[test]
fn parse_null_content_is_error() {
    let json = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": null } }]
    })
    .to_string();
    assert!(parse_chat_completions_response(&json).is_err());
}

#[test]
fn parse_invalid_json_is_error() {
    assert!(matches!(parse_chat_completions_response("not json"), Err(LlmError::ApiParse(_))));
}
