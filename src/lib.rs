//! # card-gallery
//!
//! Leptos + WASM frontend for a filterable trading-card gallery.
//!
//! This crate contains the page components, application state, the card
//! renderer, and the one-shot data loader. It integrates with the
//! `lightbox` crate for the zoom/pan image viewer via the `LightboxHost`
//! bridge component.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod render;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::debug!("card-gallery starting");
    }
    leptos::mount::mount_to_body(app::App);
}
