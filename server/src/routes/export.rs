//! PDF export routes for lesson plans and grading reports.

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};

use edunexus_client::net::types::{GradingReport, LessonPlan, LessonPlanExport};

use crate::routes::error::ApiError;
use crate::services::pdf;

const PDF_MIME: &str = "application/pdf";
pub const NO_LESSON_PLAN: &str = "No lesson plan data provided.";

fn has_content(plan: &LessonPlan) -> bool {
    !plan.title.trim().is_empty()
        || !plan.duration.trim().is_empty()
        || !plan.objectives.is_empty()
        || !plan.materials.is_empty()
        || !plan.activities.is_empty()
        || !plan.assessment.is_empty()
        || !plan.differentiation.is_empty()
}

fn pdf_attachment(bytes: Vec<u8>, file_name: &str) -> Response {
    (
        [
            (CONTENT_TYPE, PDF_MIME.to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{file_name}\"")),
        ],
        bytes,
    )
        .into_response()
}

/// `POST /api/export-lesson-plan-pdf`
pub async fn export_lesson_plan_pdf(Json(export): Json<LessonPlanExport>) -> Result<Response, ApiError> {
    if !has_content(&export.plan) {
        return Err(ApiError::BadRequest(NO_LESSON_PLAN.into()));
    }
    let title = export.plan.title.clone();
    let blocks = pdf::lesson_plan_blocks(&export);
    let bytes = pdf::render(if title.trim().is_empty() { "Lesson Plan" } else { &title }, &blocks)?;
    let file_name = pdf::pdf_file_name(&title, "lesson_plan");
    tracing::info!(%file_name, bytes = bytes.len(), "lesson plan exported");
    Ok(pdf_attachment(bytes, &file_name))
}

/// `POST /api/export-pdf`: grading report.
pub async fn export_grades_pdf(Json(report): Json<GradingReport>) -> Result<Response, ApiError> {
    let bytes = pdf::render("Grading Report", &pdf::grading_report_blocks(&report))?;
    let file_name = pdf::pdf_file_name("", "grading_report");
    tracing::info!(results = report.student_results.len(), bytes = bytes.len(), "grading report exported");
    Ok(pdf_attachment(bytes, &file_name))
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
