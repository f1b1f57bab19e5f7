//! Networking modules for the Trivela REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport seam, `api` the typed endpoint client, `types` the
//! wire schema, and `error` the failure taxonomy shared by all of them.

pub mod api;
pub mod error;
pub mod http;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
