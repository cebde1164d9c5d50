//! # cage-admin
//!
//! Leptos + WASM frontend for the zoo administration cage-management screen.
//!
//! This crate contains the REST resource client, the list/form/confirmation
//! state models, the screen orchestration that keeps them consistent with the
//! remote store, and the Leptos page and components that render them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod sync;

/// WASM entry point: installs browser logging and hydrates the server-rendered
/// application shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
