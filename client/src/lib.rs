//! # dashboard-client
//!
//! Leptos + WASM frontend for the compliance dashboard. It polls the
//! document processor, rule extractor, and violation scanner directly from
//! the browser and renders documents, extracted rules, and grouped
//! violations with resolve actions.
//!
//! The same crate is compiled twice: with `hydrate` as the browser bundle,
//! and with `ssr` as a library the Axum host renders the shell from.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
