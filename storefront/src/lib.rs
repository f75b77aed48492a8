//! # storefront
//!
//! Leptos + WASM frontend for the LampStore landing page.
//!
//! The hero hosts a physics pull cord from the `hanger` crate; accepted
//! pulls flip a page-wide lighting mode that every section restyles from.
//! Below the hero sit the static catalog sections and the footer.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logging unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
