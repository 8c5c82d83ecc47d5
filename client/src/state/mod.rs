//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain Rust state types, one per feature. Pages wrap them in `RwSignal`s
//! and share them through Leptos context; everything here is testable
//! without a browser.

pub mod accessibility;
pub mod attendance;
pub mod gamified;
pub mod grading;
pub mod lesson_plan;
pub mod overview;
pub mod planner;
pub mod session;
pub mod tutor;
pub mod ui;
pub mod wellness;
