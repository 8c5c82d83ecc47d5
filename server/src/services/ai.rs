//! AI service: tutor chat, lesson-plan generation, and assignment grading.
//!
//! DESIGN
//! ======
//! Each operation validates its input, sends one completion request through
//! [`LlmChat`], and for the structured features decodes the model's JSON
//! object into the shared wire types. Nothing is retried; the caller maps
//! [`AiError`] to an HTTP status.

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use edunexus_client::net::types::{ChatMessage, GradingReport, LessonPlan};

use crate::llm::types::{ChatOptions, LlmError, Message};
use crate::state::AppState;

pub const TUTOR_TEMPERATURE: f32 = 0.7;
pub const TUTOR_MAX_TOKENS: u32 = 1024;
pub const LESSON_PLAN_TEMPERATURE: f32 = 0.5;
pub const GRADING_TEMPERATURE: f32 = 0.2;

pub const MISSING_LESSON_FIELDS: &str = "Missing topic, grade, or duration";
pub const MISSING_ANSWERS: &str = "No answers provided for manual grading.";

const DEFAULT_RUBRIC: &str = "General accuracy, completeness, and clarity of the answer.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("no messages provided")]
    EmptyConversation,
    /// Carries the message shown to the caller.
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("model output is not a valid JSON object: {0}")]
    InvalidJson(String),
}

// =============================================================================
// TUTOR
// =============================================================================

/// Forward a tutor conversation and return the assistant's reply text.
///
/// # Errors
///
/// [`AiError::EmptyConversation`] for an empty history, otherwise LLM failures.
pub async fn tutor_reply(state: &AppState, messages: Vec<ChatMessage>) -> Result<String, AiError> {
    if messages.is_empty() {
        return Err(AiError::EmptyConversation);
    }
    let llm = state.llm.as_ref().ok_or(AiError::LlmNotConfigured)?;

    let turns = messages.len();
    let messages: Vec<Message> = messages.into_iter().map(Message::from).collect();
    let options = ChatOptions { temperature: TUTOR_TEMPERATURE, max_tokens: Some(TUTOR_MAX_TOKENS), json_mode: false };
    let response = llm.chat(options, &messages).await?;

    info!(turns, model = %response.model, output_tokens = response.output_tokens, "tutor reply");
    Ok(response.content)
}

// =============================================================================
// LESSON PLAN
// =============================================================================

#[must_use]
pub fn lesson_plan_prompt(topic: &str, grade: &str, duration: &str) -> String {
    format!(
        r#"You are an expert educational lesson planner. Create a detailed lesson plan and return it as a single JSON object.

Lesson details:
- Lesson Topic: {topic}
- Grade Level: {grade}
- Duration: {duration}

Use exactly this structure and include every field. Do not write any text or markdown outside the JSON object.

{{
  "title": "A clear, concise title for the lesson.",
  "duration": "Total duration of the lesson.",
  "objectives": ["2-4 specific learning objectives."],
  "materials": ["3-5 materials needed."],
  "activities": [
    {{"name": "Activity name (e.g. Warm-up)", "duration": "Duration", "description": "Short description."}},
    {{"name": "Activity name (e.g. Guided Practice)", "duration": "Duration", "description": "Short description."}}
  ],
  "assessment": ["1-3 assessment strategies."],
  "differentiation": ["1-3 differentiation strategies for different learner needs."]
}}"#
    )
}

/// Ask the model for a lesson plan in JSON mode.
///
/// # Errors
///
/// [`AiError::MissingFields`] when any input is blank, [`AiError::InvalidJson`]
/// when the reply is not a lesson-plan object, otherwise LLM failures.
pub async fn generate_lesson_plan(
    state: &AppState,
    topic: &str,
    grade: &str,
    duration: &str,
) -> Result<LessonPlan, AiError> {
    if [topic, grade, duration].iter().any(|v| v.trim().is_empty()) {
        return Err(AiError::MissingFields(MISSING_LESSON_FIELDS));
    }
    let llm = state.llm.as_ref().ok_or(AiError::LlmNotConfigured)?;

    let prompt = lesson_plan_prompt(topic.trim(), grade.trim(), duration.trim());
    let options = ChatOptions { temperature: LESSON_PLAN_TEMPERATURE, max_tokens: None, json_mode: true };
    let response = llm.chat(options, &[Message::user(prompt)]).await?;

    let plan: LessonPlan = parse_model_json(&response.content)?;
    info!(topic = topic.trim(), activities = plan.activities.len(), "lesson plan generated");
    Ok(plan)
}

// =============================================================================
// GRADING
// =============================================================================

#[must_use]
pub fn grading_prompt(manual_answers: &str, rubric: &str) -> String {
    format!(
        r#"You are an expert academic grader. Grade the student responses below against the rubric and return a single JSON object.

Student responses:
{manual_answers}

Grading rubric:
{rubric}

Each response is usually written as "Student Name: answer". Use that to identify and grade every student.

Use exactly this structure:

{{
  "totalSubmissions": "Number of submissions analyzed.",
  "avgScore": "Average score of all submissions (number, 0-100).",
  "gradedCount": "Number of submissions graded.",
  "timeToGrade": "Short human-readable estimate of time saved.",
  "distribution": {{
    "A (90-100%)": "Count of A grades.",
    "B (80-89%)": "Count of B grades.",
    "C (70-79%)": "Count of C grades.",
    "D (60-69%)": "Count of D grades.",
    "F (0-59%)": "Count of F grades."
  }},
  "studentResults": [
    {{"name": "Student name or identifier", "score": "Score (number, 0-100).", "feedback": "Concise, actionable feedback."}}
  ]
}}"#
    )
}

/// Grade pasted answers in JSON mode.
///
/// # Errors
///
/// [`AiError::MissingFields`] without answers, [`AiError::InvalidJson`] when
/// the reply is not a grading report, otherwise LLM failures.
pub async fn grade_assignments(state: &AppState, manual_answers: &str, rubric: &str) -> Result<GradingReport, AiError> {
    if manual_answers.trim().is_empty() {
        return Err(AiError::MissingFields(MISSING_ANSWERS));
    }
    let llm = state.llm.as_ref().ok_or(AiError::LlmNotConfigured)?;

    let rubric = if rubric.trim().is_empty() { DEFAULT_RUBRIC } else { rubric.trim() };
    let prompt = grading_prompt(manual_answers.trim(), rubric);
    let options = ChatOptions { temperature: GRADING_TEMPERATURE, max_tokens: None, json_mode: true };
    let response = llm.chat(options, &[Message::user(prompt)]).await?;

    let report: GradingReport = parse_model_json(&response.content)?;
    info!(graded = report.student_results.len(), avg_score = report.avg_score, "assignments graded");
    Ok(report)
}

// =============================================================================
// MODEL OUTPUT
// =============================================================================

/// Slice the outermost `{ ... }` out of a reply that may carry code fences
/// or stray prose around it.
#[must_use]
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

pub(crate) fn parse_model_json<T: DeserializeOwned>(raw: &str) -> Result<T, AiError> {
    let Some(object) = extract_json_object(raw) else {
        warn!(len = raw.len(), "model reply has no JSON object");
        return Err(AiError::InvalidJson("no JSON object in reply".into()));
    };
    serde_json::from_str(object).map_err(|e| {
        warn!(error = %e, "model reply failed to decode");
        AiError::InvalidJson(e.to_string())
    })
}

#[cfg(test)]
#[path = "ai_test.rs"]
mod tests;
