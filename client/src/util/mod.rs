//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, speech,
//! downloads, timers, document attributes) from page and component logic so
//! the logic stays testable without a browser.

pub mod auth;
pub mod chart_math;
pub mod clock;
pub mod download;
pub mod markdown;
pub mod speech;
pub mod storage;
pub mod theme;
pub mod ticker;
