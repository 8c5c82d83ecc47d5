//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server links this crate (with `ssr`) and serializes these exact types,
//! so both ends agree on field names without a separate schema crate. Field
//! names are camelCase on the wire except where the backend contract says
//! otherwise (`manual_answers`).
//!
//! Model-produced payloads (`LessonPlan`, `GradingReport`) are deserialized
//! leniently: numbers may arrive as strings and list fields may be missing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Which side of the platform a user belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }

    /// Route of this role's login page.
    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Student => "/student-login",
            Self::Teacher => "/teacher-login",
        }
    }

    /// Route of this role's dashboard.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Student => "/student",
            Self::Teacher => "/teacher",
        }
    }
}

fn default_level() -> u32 {
    1
}

/// A signed-in user as returned by the auth endpoints and kept in session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    /// Accumulated experience points.
    #[serde(default)]
    pub xp: u32,
    /// Derived from `xp`; stored so the dashboard can render without recomputing.
    #[serde(default = "default_level")]
    pub level: u32,
    /// Earned badge names, ordered by first award, no duplicates.
    #[serde(default)]
    pub badges: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub user: User,
    pub token: String,
}

/// Registration form payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned by the backend. Either field may carry the text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// One turn in a tutor conversation, in chat-completions form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `system`, `user`, or `assistant`.
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self { role: role.to_owned(), content: content.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorChatResponse {
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlanRequest {
    pub topic: String,
    pub grade: String,
    pub duration: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonActivity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

/// A generated lesson plan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub activities: Vec<LessonActivity>,
    #[serde(default)]
    pub assessment: Vec<String>,
    #[serde(default)]
    pub differentiation: Vec<String>,
}

/// Export payload: the plan plus the grade level it was generated for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlanExport {
    #[serde(flatten)]
    pub plan: LessonPlan,
    #[serde(default)]
    pub grade: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRequest {
    pub manual_answers: String,
    pub rubric: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentResult {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_f64_loose")]
    pub score: f64,
    #[serde(default)]
    pub feedback: String,
}

/// Summary produced by the grading endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingReport {
    #[serde(default, deserialize_with = "deserialize_u32_loose")]
    pub total_submissions: u32,
    #[serde(default, deserialize_with = "deserialize_f64_loose")]
    pub avg_score: f64,
    #[serde(default, deserialize_with = "deserialize_u32_loose")]
    pub graded_count: u32,
    #[serde(default, deserialize_with = "deserialize_string_loose")]
    pub time_to_grade: String,
    /// Letter band label (`"A (90-100%)"`) to count. Band labels sort A..F.
    #[serde(default, deserialize_with = "deserialize_distribution")]
    pub distribution: BTreeMap<String, u32>,
    #[serde(default)]
    pub student_results: Vec<StudentResult>,
}

fn loose_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    }
}

fn loose_u32(value: &serde_json::Value) -> Option<u32> {
    let float = loose_f64(value)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    if float.is_finite() && float >= 0.0 && float <= f64::from(u32::MAX) {
        return Some(float.round() as u32);
    }
    None
}

fn deserialize_f64_loose<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    loose_f64(&value).ok_or_else(|| D::Error::custom("expected number or numeric string"))
}

fn deserialize_u32_loose<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    loose_u32(&value).ok_or_else(|| D::Error::custom("expected non-negative count"))
}

fn deserialize_string_loose<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn deserialize_distribution<'de, D>(deserializer: D) -> Result<BTreeMap<String, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(band, count)| {
            loose_u32(&count)
                .map(|c| (band.clone(), c))
                .ok_or_else(|| D::Error::custom(format!("bad count for band `{band}`")))
        })
        .collect()
}
