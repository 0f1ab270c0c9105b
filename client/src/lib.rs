//! # client
//!
//! Leptos + WASM frontend for the EcoPack360 packaging dashboard.
//!
//! This crate contains the application shell, the five pages, reusable
//! components, component-local state models and chart geometry. All data
//! comes from the `catalog` crate's fixture tables.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    log::info!("hydrating EcoPack360");
    leptos::mount::hydrate_body(app::App);
}
