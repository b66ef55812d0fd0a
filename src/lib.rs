//! # nilotic-wallet
//!
//! Leptos + WASM frontend for the Nilotic Wallet product.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the wallet backend. The session/authorization state machine in
//! `state::auth` decides which routes are reachable; `net::client` attaches
//! the session token to every backend call.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
