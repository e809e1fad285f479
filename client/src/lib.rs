//! # client
//!
//! Leptos + WASM frontend for the hospital appointment booking site.
//!
//! This crate contains pages, components, the session signal, REST types and
//! calls, and browser helpers. Authorization decisions come from the `clinic`
//! crate; this crate only applies them to the router.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
