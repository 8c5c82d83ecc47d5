//! Lesson planner form and generation state.
//!
//! A generation attempt is `begin` followed by exactly one of `succeed` or
//! `fail`. `begin` clears the previous plan and error, so a failed attempt
//! always ends with no plan and a single error message.

#[cfg(test)]
#[path = "lesson_plan_test.rs"]
mod lesson_plan_test;

use crate::net::types::{LessonPlan, LessonPlanExport, LessonPlanRequest};

pub const GRADE_LEVELS: [&str; 4] =
    ["Elementary (K-5)", "Middle School (6-8)", "High School (9-12)", "College/University"];

pub const DURATIONS: [&str; 4] = ["30 minutes", "45 minutes", "60 minutes", "90 minutes"];

pub const MISSING_FIELDS: &str = "Please fill out all fields.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonPlanner {
    pub topic: String,
    pub grade: String,
    pub duration: String,
    plan: Option<LessonPlan>,
    error: Option<String>,
    generating: bool,
}

impl LessonPlanner {
    #[must_use]
    pub fn plan(&self) -> Option<&LessonPlan> {
        self.plan.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Start a generation. Returns the request to send, or `None` after
    /// recording the validation error.
    pub fn begin(&mut self) -> Option<LessonPlanRequest> {
        let topic = self.topic.trim();
        if topic.is_empty() || self.grade.is_empty() || self.duration.is_empty() {
            self.error = Some(MISSING_FIELDS.to_owned());
            return None;
        }
        self.error = None;
        self.plan = None;
        self.generating = true;
        Some(LessonPlanRequest {
            topic: topic.to_owned(),
            grade: self.grade.clone(),
            duration: self.duration.clone(),
        })
    }

    pub fn succeed(&mut self, plan: LessonPlan) {
        self.generating = false;
        self.error = None;
        self.plan = Some(plan);
    }

    pub fn fail(&mut self, message: String) {
        self.generating = false;
        self.plan = None;
        self.error = Some(message);
    }

    /// Export failures keep the plan on screen.
    pub fn export_failed(&mut self, message: String) {
        self.error = Some(message);
    }

    /// A successful export clears any earlier export failure.
    pub fn export_succeeded(&mut self) {
        self.error = None;
    }

    /// PDF export payload for the current plan.
    #[must_use]
    pub fn export_payload(&self) -> Option<LessonPlanExport> {
        self.plan.as_ref().map(|plan| LessonPlanExport { plan: plan.clone(), grade: self.grade.clone() })
    }
}
