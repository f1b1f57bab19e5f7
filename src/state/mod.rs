//! Shared client-side state containers.
//!
//! DESIGN
//! ======
//! Each container is a plain struct held in an `RwSignal` and provided
//! through Leptos context. Actions are free functions that take the API client
//! and the signal explicitly, so nothing reaches for a global store.

pub mod auth;
pub mod games;
pub mod leaderboard;
pub mod profile;
