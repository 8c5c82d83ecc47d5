use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_to_groq_key_and_model() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("GROQ_API_KEY", "gsk-test")])).unwrap();
    assert_eq!(cfg.api_key, "gsk-test");
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn parses_overrides() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_API_KEY_ENV", "OPENAI_API_KEY"),
        ("OPENAI_API_KEY", "sk-test"),
        ("LLM_MODEL", "gpt-4o-mini"),
        ("LLM_BASE_URL", "https://example.test/v1/"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_key, "sk-test");
    assert_eq!(cfg.model, "gpt-4o-mini");
    assert_eq!(cfg.base_url, "https://example.test/v1");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn missing_key_names_the_expected_variable() {
    let err = LlmConfig::from_lookup(lookup_from(&[("LLM_API_KEY_ENV", "MY_KEY")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { var } if var == "MY_KEY"));
}

#[test]
fn blank_key_counts_as_missing() {
    let err = LlmConfig::from_lookup(lookup_from(&[("GROQ_API_KEY", "   ")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { var } if var == DEFAULT_API_KEY_ENV));
}

#[test]
fn invalid_timeouts_fall_back_to_defaults() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("GROQ_API_KEY", "k"),
        ("LLM_REQUEST_TIMEOUT_SECS", "soon"),
        ("LLM_CONNECT_TIMEOUT_SECS", "-1"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_LLM_CONNECT_TIMEOUT_SECS);
}
