//! # mokapro
//!
//! Leptos + WASM fleet dashboard. Every URL goes through a single guarded
//! outlet: the `navigation` crate decides whether the current session may
//! see the requested view, must detour through sign-in, or bounces to the
//! dashboard, and this crate renders the outcome.
//!
//! Browser-only code sits behind the `csr` feature so the crate and its
//! tests build natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
