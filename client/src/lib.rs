//! # client
//!
//! Leptos single-page front end for the timeline wiki.
//!
//! This crate composes the router, the route-level pages, and the login
//! panel around the session store from the `timeline` crate. Browser glue
//! (`localStorage`, `fetch`, scrolling) lives behind the `csr` feature so the
//! state and helper logic stays testable natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
