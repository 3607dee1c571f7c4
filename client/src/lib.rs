//! # client
//!
//! Leptos + WASM frontend for Ad Studio.
//!
//! The crate is organised around the application shell in [`app`]: an
//! authentication gate ([`auth_gate`]) wraps a persistent navigation bar and
//! a data-driven route table ([`routing`]) that selects one page per path.
//! Pages, components, client state and the REST helpers live in their own
//! modules and are opaque to the shell.

pub mod app;
pub mod auth_gate;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod shell;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating ad studio shell");
    leptos::mount::hydrate_body(app::App);
}
