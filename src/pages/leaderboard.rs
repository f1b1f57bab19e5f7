//! Leaderboard page rendering the rankings through `DataTable`.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::nav_bar::NavBar;
use crate::net::types::LeaderboardEntry;
use crate::state::leaderboard::LeaderboardState;

pub const LEADERBOARD_HEADERS: &[&str] = &["Rank", "Player", "Played", "Won", "Drawn", "Lost", "Points", "Win %"];

/// Table rows in server order, ranked from 1.
pub fn leaderboard_rows(entries: &[LeaderboardEntry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            vec![
                (i + 1).to_string(),
                entry.username.clone(),
                entry.matches_played.to_string(),
                entry.matches_won.to_string(),
                entry.matches_drawn.to_string(),
                entry.matches_lost.to_string(),
                entry.total_points.to_string(),
                format!("{:.2}", entry.win_percentage),
            ]
        })
        .collect()
}

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let leaderboard = expect_context::<RwSignal<LeaderboardState>>();

    #[cfg(feature = "csr")]
    {
        let api = expect_context::<crate::net::api::Api>();
        leptos::task::spawn_local(async move {
            crate::state::leaderboard::fetch_leaderboard(&api, leaderboard).await;
        });
    }

    let rows = Signal::derive(move || leaderboard.with(|state| leaderboard_rows(&state.entries)));

    view! {
        <NavBar/>
        <main class="leaderboard">
            <h1>"Leaderboard"</h1>
            <DataTable headers=LEADERBOARD_HEADERS rows=rows empty_text="No ranked players yet."/>
        </main>
    }
}
