//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page pulls its state container from context, kicks off the matching
//! fetch on mount, and delegates shared rendering to `components`.

pub mod edit_profile;
pub mod games;
pub mod landing;
pub mod leaderboard;
pub mod main_page;
pub mod trivia;
