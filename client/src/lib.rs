//! # client
//!
//! Leptos + WASM frontend for the handwritten-math calculator.
//!
//! This crate contains the page, components, session state, the recognition
//! client, and the typesetter bridge. It drives the `canvas` crate through the
//! `CanvasHost` bridge component.
//!
//! Browser-only code sits behind the `csr` feature so state, wire types, and
//! configuration build and test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point: install logging, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
