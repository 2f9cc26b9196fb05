//! # client
//!
//! Leptos + WASM frontend of the compute console: resource pools and
//! cluster monitoring over the inventory repository.
//!
//! This crate contains pages, components, client state and browser
//! utilities. Pure data shaping lives in the `charts` and `inventory` crates
//! so it can be tested natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
