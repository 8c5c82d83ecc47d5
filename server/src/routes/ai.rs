//! AI routes: tutor chat, lesson-plan generation, assignment grading.

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;

use edunexus_client::net::types::{ChatMessage, GradingReport, LessonPlan, TutorChatResponse};

use crate::routes::error::{ApiError, INTERNAL_ERROR};
use crate::services::ai;
use crate::state::AppState;

pub const TUTOR_FAILED: &str = "Failed to get a response from the AI tutor.";
pub const LESSON_PLAN_INVALID: &str = "Failed to generate a valid lesson plan. Please try again.";
pub const GRADE_REPORT_INVALID: &str =
    "Failed to generate a valid grade report. Please check the format of the student answers and try again.";

#[derive(Deserialize)]
pub struct TutorChatBody {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// `POST /api/groq/chat`: one tutor turn over the full conversation.
pub async fn tutor_chat(
    State(state): State<AppState>,
    Json(body): Json<TutorChatBody>,
) -> Result<Json<TutorChatResponse>, ApiError> {
    let content = ai::tutor_reply(&state, body.messages)
        .await
        .map_err(|e| ApiError::from_ai(e, TUTOR_FAILED, TUTOR_FAILED))?;
    Ok(Json(TutorChatResponse { content }))
}

#[derive(Deserialize)]
pub struct LessonPlanBody {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub duration: String,
}

/// `POST /api/generate-lesson-plan`
pub async fn generate_lesson_plan(
    State(state): State<AppState>,
    Json(body): Json<LessonPlanBody>,
) -> Result<Json<LessonPlan>, ApiError> {
    let plan = ai::generate_lesson_plan(&state, &body.topic, &body.grade, &body.duration)
        .await
        .map_err(|e| ApiError::from_ai(e, INTERNAL_ERROR, LESSON_PLAN_INVALID))?;
    Ok(Json(plan))
}

#[derive(Deserialize)]
pub struct GradeBody {
    #[serde(default)]
    pub manual_answers: String,
    #[serde(default)]
    pub rubric: String,
}

/// `POST /api/grade-assignments`
pub async fn grade_assignments(
    State(state): State<AppState>,
    Json(body): Json<GradeBody>,
) -> Result<Json<GradingReport>, ApiError> {
    let report = ai::grade_assignments(&state, &body.manual_answers, &body.rubric)
        .await
        .map_err(|e| ApiError::from_ai(e, INTERNAL_ERROR, GRADE_REPORT_INVALID))?;
    Ok(Json(report))
}

#[cfg(test)]
#[path = "ai_test.rs"]
mod tests;
