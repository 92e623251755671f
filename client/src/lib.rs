//! # client
//!
//! Leptos + WASM frontend for the Devansh Digital Studio site.
//!
//! Pages and section components render the marketing content; the floating
//! chat widget hosts a `chat::Conversation` and arms its timers in the
//! browser; the contact form posts to the server's `/api/contact` relay.
//! The same crate is compiled with `ssr` for server rendering and with
//! `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::info!("hydrating studio client");
    leptos::mount::hydrate_body(app::App);
}
