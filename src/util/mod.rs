//! Browser helpers shared across state and page modules.

pub mod cookie;
