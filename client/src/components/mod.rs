//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and feature panels while reading and
//! writing shared state from Leptos context providers.

pub mod attendance_tool;
pub mod dashboard_layout;
pub mod engagement_chart;
pub mod gamified_learning;
pub mod grading_tool;
pub mod lesson_planner;
pub mod progress_ring;
pub mod study_planner;
pub mod tutor_chat;
pub mod wellness_center;
