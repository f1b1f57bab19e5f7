//! Reusable UI components.

pub mod data_table;
pub mod nav_bar;
pub mod require_auth;
