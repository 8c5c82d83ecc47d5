//! # edunexus-client
//!
//! Leptos + WASM frontend for the EduNexus learning platform.
//!
//! This crate contains pages, components, reactive application state, the
//! browser-storage persistence layer, and the REST client plus wire types
//! shared with the `edunexus-server` backend. It is compiled with `hydrate`
//! for the browser bundle and with `ssr` when linked into the server.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
