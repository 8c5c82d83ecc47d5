//! Grading tool form, rubric choice and report state.

#[cfg(test)]
#[path = "grading_test.rs"]
mod grading_test;

use crate::net::types::{GradeRequest, GradingReport};

pub const MISSING_ANSWERS: &str = "Please enter some answers to grade.";
pub const UPLOAD_UNAVAILABLE: &str = "File upload grading is not available yet. Switch to manual input.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradingMode {
    Upload,
    #[default]
    Manual,
}

/// Rubric style. The value is forwarded to the grader as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rubric {
    #[default]
    Standard,
    Points,
    Competency,
    Holistic,
}

impl Rubric {
    pub const ALL: [Self; 4] = [Self::Standard, Self::Points, Self::Competency, Self::Holistic];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Points => "points",
            Self::Competency => "competency",
            Self::Holistic => "holistic",
        }
    }

    #[must_use]
    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard Grading (A-F)",
            Self::Points => "Points-based (0-100)",
            Self::Competency => "Competency-based",
            Self::Holistic => "Holistic Rubric",
        }
    }
}

/// A ≥ 90, B ≥ 80, C ≥ 70, D ≥ 60, otherwise F.
#[must_use]
pub fn letter_grade(score: f64) -> char {
    match score {
        s if s >= 90.0 => 'A',
        s if s >= 80.0 => 'B',
        s if s >= 70.0 => 'C',
        s if s >= 60.0 => 'D',
        _ => 'F',
    }
}

/// Share of `total` as a bar width in percent, clamped to 0..=100.
#[must_use]
pub fn distribution_percent(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(count) / f64::from(total) * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradingTool {
    pub mode: GradingMode,
    pub answers: String,
    pub rubric: Rubric,
    report: Option<GradingReport>,
    error: Option<String>,
    grading: bool,
}

impl GradingTool {
    #[must_use]
    pub fn report(&self) -> Option<&GradingReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_grading(&self) -> bool {
        self.grading
    }

    /// Validate the form and start a grading run.
    pub fn begin(&mut self) -> Option<GradeRequest> {
        let failure = match self.mode {
            GradingMode::Upload => Some(UPLOAD_UNAVAILABLE),
            GradingMode::Manual if self.answers.trim().is_empty() => Some(MISSING_ANSWERS),
            GradingMode::Manual => None,
        };
        if let Some(message) = failure {
            self.error = Some(message.to_owned());
            return None;
        }
        self.error = None;
        self.report = None;
        self.grading = true;
        Some(GradeRequest { manual_answers: self.answers.clone(), rubric: self.rubric.as_str().to_owned() })
    }

    pub fn succeed(&mut self, report: GradingReport) {
        self.grading = false;
        self.error = None;
        self.report = Some(report);
    }

    pub fn fail(&mut self, message: String) {
        self.grading = false;
        self.report = None;
        self.error = Some(message);
    }

    pub fn export_failed(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn export_succeeded(&mut self) {
        self.error = None;
    }
}
