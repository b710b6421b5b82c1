//! # auth-portal
//!
//! Leptos + WASM frontend for account sign-in and session management in
//! front of a managed identity backend.
//!
//! This crate contains the auth flow pages, credential-collector
//! components, application state, the identity API client, and the
//! location-callback interpreter for one-time challenge and federated
//! redirect returns.

pub mod app;
pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
