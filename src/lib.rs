//! # trivela-client
//!
//! Leptos + WASM single-page client for the Trivela football trivia app.
//!
//! This crate contains the route table and auth guard, the state containers
//! for auth, game catalogues, leaderboard and profile, the typed REST client
//! for the backend, and the pages that tie them together. Authentication,
//! game logic and rankings all live on the backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
