//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth redirects, shared feature
//! signals) and delegates rendering details to `components`.

pub mod accessibility;
pub mod landing;
pub mod login;
pub mod student_dashboard;
pub mod teacher_dashboard;
pub mod verification;
