//! Networking modules for the backend JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and `types` defines the wire schema shared
//! with `edunexus-server`.

pub mod api;
pub mod types;
