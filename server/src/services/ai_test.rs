use super::*;
use std::sync::Arc;

use crate::state::test_helpers::{self, MockLlm};

fn state_with(mock: &Arc<MockLlm>) -> AppState {
    test_helpers::test_app_state_with_llm(mock.clone())
}

const PLAN_JSON: &str = r#"{
  "title": "Fractions Fun",
  "duration": "45 minutes",
  "objectives": ["Compare fractions"],
  "materials": ["Fraction strips"],
  "activities": [{"name": "Warm-up", "duration": "5 min", "description": "Quick review"}],
  "assessment": ["Exit ticket"],
  "differentiation": ["Visual aids"]
}"#;

const REPORT_JSON: &str = r#"{
  "totalSubmissions": "2",
  "avgScore": 85.5,
  "gradedCount": 2,
  "timeToGrade": "Saved 10 minutes",
  "distribution": {"A (90-100%)": 1, "B (80-89%)": "1", "C (70-79%)": 0, "D (60-69%)": 0, "F (0-59%)": 0},
  "studentResults": [
    {"name": "Ana", "score": 91, "feedback": "Great"},
    {"name": "Ben", "score": "80", "feedback": "Good"}
  ]
}"#;

// =========================================================================
// extract_json_object
// =========================================================================

#[test]
fn extract_plain_object() {
    assert_eq!(extract_json_object(r#"{"a":1}"#), Some(r#"{"a":1}"#));
}

#[test]
fn extract_strips_code_fence_and_prose() {
    let raw = "Here you go:\n```json\n{\"a\": {\"b\": 2}}\n```\nEnjoy!";
    assert_eq!(extract_json_object(raw), Some("{\"a\": {\"b\": 2}}"));
}

#[test]
fn extract_without_braces_is_none() {
    assert_eq!(extract_json_object("no json here"), None);
    assert_eq!(extract_json_object("} backwards {"), None);
}

// =========================================================================
// prompts
// =========================================================================

#[test]
fn lesson_prompt_mentions_inputs_and_fields() {
    let prompt = lesson_plan_prompt("Photosynthesis", "Grade 7", "60 minutes");
    assert!(prompt.contains("Photosynthesis"));
    assert!(prompt.contains("Grade 7"));
    assert!(prompt.contains("60 minutes"));
    for field in ["\"objectives\"", "\"materials\"", "\"activities\"", "\"assessment\"", "\"differentiation\""] {
        assert!(prompt.contains(field), "missing {field}");
    }
}

#[test]
fn grading_prompt_mentions_answers_rubric_and_bands() {
    let prompt = grading_prompt("Ana: 42", "Exact answers only");
    assert!(prompt.contains("Ana: 42"));
    assert!(prompt.contains("Exact answers only"));
    assert!(prompt.contains("A (90-100%)"));
    assert!(prompt.contains("studentResults"));
}

// =========================================================================
// tutor_reply
// =========================================================================

#[tokio::test]
async fn tutor_reply_rejects_empty_history() {
    let mock = Arc::new(MockLlm::replying("unused"));
    let err = tutor_reply(&state_with(&mock), vec![]).await.unwrap_err();
    assert!(matches!(err, AiError::EmptyConversation));
    assert!(mock.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn tutor_reply_without_llm_is_not_configured() {
    let state = test_helpers::test_app_state();
    let err = tutor_reply(&state, vec![ChatMessage::new("user", "hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::LlmNotConfigured));
}

#[tokio::test]
async fn tutor_reply_forwards_history_with_tutor_options() {
    let mock = Arc::new(MockLlm::replying("2 + 2 = 4"));
    let history = vec![ChatMessage::new("system", "You are a tutor."), ChatMessage::new("user", "What is 2+2?")];
    let reply = tutor_reply(&state_with(&mock), history).await.unwrap();
    assert_eq!(reply, "2 + 2 = 4");

    let calls = mock.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (options, messages) = &calls[0];
    assert!((options.temperature - TUTOR_TEMPERATURE).abs() < f32::EPSILON);
    assert_eq!(options.max_tokens, Some(TUTOR_MAX_TOKENS));
    assert!(!options.json_mode);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, "system");
}

#[tokio::test]
async fn tutor_reply_propagates_llm_failure() {
    let mock = Arc::new(MockLlm::failing());
    let err = tutor_reply(&state_with(&mock), vec![ChatMessage::new("user", "hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::Llm(_)));
}

// =========================================================================
// generate_lesson_plan
// =========================================================================

#[tokio::test]
async fn lesson_plan_requires_all_fields() {
    let mock = Arc::new(MockLlm::replying(PLAN_JSON));
    let err = generate_lesson_plan(&state_with(&mock), "Fractions", " ", "45 minutes")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::MissingFields(_)));
    assert!(mock.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn lesson_plan_decodes_json_reply() {
    let mock = Arc::new(MockLlm::replying(PLAN_JSON));
    let plan = generate_lesson_plan(&state_with(&mock), "Fractions", "Grade 4", "45 minutes")
        .await
        .unwrap();
    assert_eq!(plan.title, "Fractions Fun");
    assert_eq!(plan.activities.len(), 1);
    assert_eq!(plan.activities[0].name, "Warm-up");

    let calls = mock.calls.lock().unwrap();
    let (options, messages) = &calls[0];
    assert!(options.json_mode);
    assert!((options.temperature - LESSON_PLAN_TEMPERATURE).abs() < f32::EPSILON);
    assert_eq!(messages[0].role, "user");
    assert!(messages[0].content.contains("Fractions"));
}

#[tokio::test]
async fn lesson_plan_rejects_unparsable_reply() {
    let mock = Arc::new(MockLlm::replying("Sorry, I cannot help with that."));
    let err = generate_lesson_plan(&state_with(&mock), "Fractions", "Grade 4", "45 minutes")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::InvalidJson(_)));
}

#[tokio::test]
async fn lesson_plan_rejects_wrongly_shaped_object() {
    let mock = Arc::new(MockLlm::replying(r#"{"objectives": "not a list"}"#));
    let err = generate_lesson_plan(&state_with(&mock), "Fractions", "Grade 4", "45 minutes")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::InvalidJson(_)));
}

// =========================================================================
// grade_assignments
// =========================================================================

#[tokio::test]
async fn grading_requires_answers() {
    let mock = Arc::new(MockLlm::replying(REPORT_JSON));
    let err = grade_assignments(&state_with(&mock), "   ", "rubric")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::MissingFields(msg) if msg == MISSING_ANSWERS));
}

#[tokio::test]
async fn grading_decodes_loose_numbers() {
    let mock = Arc::new(MockLlm::replying(REPORT_JSON));
    let report = grade_assignments(&state_with(&mock), "Ana: 4\nBen: 5", "Exact answers")
        .await
        .unwrap();
    assert_eq!(report.total_submissions, 2);
    assert!((report.avg_score - 85.5).abs() < f64::EPSILON);
    assert_eq!(report.distribution.get("B (80-89%)"), Some(&1));
    assert_eq!(report.student_results.len(), 2);
    assert!((report.student_results[1].score - 80.0).abs() < f64::EPSILON);

    let calls = mock.calls.lock().unwrap();
    assert!((calls[0].0.temperature - GRADING_TEMPERATURE).abs() < f32::EPSILON);
}

#[tokio::test]
async fn grading_uses_default_rubric_when_blank() {
    let mock = Arc::new(MockLlm::replying(REPORT_JSON));
    grade_assignments(&state_with(&mock), "Ana: 4", "").await.unwrap();
    let calls = mock.calls.lock().unwrap();
    assert!(calls[0].1[0].content.contains(DEFAULT_RUBRIC));
}

#[tokio::test]
async fn grading_rejects_unparsable_reply() {
    let mock = Arc::new(MockLlm::replying("{ not json }"));
    let err = grade_assignments(&state_with(&mock), "Ana: 4", "rubric")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::InvalidJson(_)));
}
