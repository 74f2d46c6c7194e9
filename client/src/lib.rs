//! # client
//!
//! Leptos + WASM frontend for managing voyages: a table of scheduled sailings
//! with a creation sheet and per-row delete, backed by the voyage REST API.
//!
//! This crate contains the page, components, application state, network
//! types, and the form validation rules. Pure logic lives in `state` and
//! `util` so it can be tested without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
