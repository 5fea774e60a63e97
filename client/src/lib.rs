//! # client
//!
//! Leptos + WASM frontend for creating and listing roadmaps.
//!
//! This crate contains the root view, the creation and listing components,
//! their view state, and the REST client for the roadmap resource.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
