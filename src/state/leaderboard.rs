//! Leaderboard ranking state.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::http::HttpClient;
use crate::net::types::LeaderboardEntry;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeaderboardState {
    pub entries: Vec<LeaderboardEntry>,
}

/// Refresh the rankings. Unlike the game lists, the previous rankings stay
/// visible while loading and after a failed refresh.
pub async fn fetch_leaderboard<C: HttpClient>(api: &Api<C>, leaderboard: RwSignal<LeaderboardState>) {
    match api.fetch_leaderboard().await {
        Ok(entries) => leaderboard.update(|state| state.entries = entries),
        Err(e) => log::error!("fetching leaderboard details failed: {e}"),
    }
}
