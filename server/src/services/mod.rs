//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic (prompting, demo accounts, PDF layout)
//! so route handlers can stay focused on protocol translation.

pub mod ai;
pub mod auth;
pub mod pdf;
