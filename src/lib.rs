//! # parkhub-client
//!
//! Leptos + WASM front-end for the ParkHub parking reservation service.
//! A small single-page application: a router with role-based navigation
//! guards, a session store mirrored to browser storage, and a centralized
//! HTTP gateway with session-expiry handling.
//!
//! Browser-only code (fetch, localStorage, redirects) is gated behind the
//! `csr` feature so the core logic compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod storage;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
