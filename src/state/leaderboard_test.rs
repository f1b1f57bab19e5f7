use futures::executor::block_on;

use super::*;
use crate::net::testing::ScriptedClient;

fn entry(username: &str, won: i64, win_percentage: f64) -> LeaderboardEntry {
    LeaderboardEntry {
        username: username.to_owned(),
        matches_played: 4,
        matches_won: won,
        matches_drawn: 0,
        matches_lost: 4 - won,
        total_points: won * 2,
        win_percentage,
    }
}

const TWO_ENTRIES: &str = r#"{"leaderboard": [
    {"username": "ana", "matches_played": 4, "matches_won": 3, "matches_drawn": 0,
     "matches_lost": 1, "total_points": 6, "win_percentage": 75.0},
    {"username": "bo", "matches_played": 4, "matches_won": 1, "matches_drawn": 0,
     "matches_lost": 3, "total_points": 2, "win_percentage": 25.0}
]}"#;

#[test]
fn leaderboard_state_default_is_empty() {
    assert!(LeaderboardState::default().entries.is_empty());
}

#[test]
fn fetch_replaces_entries_in_server_order() {
    let client = ScriptedClient::new();
    client.reply(200, TWO_ENTRIES);
    let leaderboard = RwSignal::new(LeaderboardState { entries: vec![entry("stale", 0, 0.0)] });

    block_on(fetch_leaderboard(&client.api(), leaderboard));

    assert_eq!(leaderboard.get_untracked().entries, vec![entry("ana", 3, 75.0), entry("bo", 1, 25.0)]);
}

#[test]
fn fetch_does_not_clear_before_resolution() {
    let client = ScriptedClient::new();
    client.reply(200, TWO_ENTRIES);
    let leaderboard = RwSignal::new(LeaderboardState { entries: vec![entry("stale", 0, 0.0)] });

    let api = client.api();
    let pending = fetch_leaderboard(&api, leaderboard);
    assert_eq!(leaderboard.get_untracked().entries.len(), 1);
    block_on(pending);
}

#[test]
fn fetch_failure_keeps_previous_entries() {
    let client = ScriptedClient::new();
    client.reply(500, "");
    let leaderboard = RwSignal::new(LeaderboardState { entries: vec![entry("stale", 0, 0.0)] });

    block_on(fetch_leaderboard(&client.api(), leaderboard));

    assert_eq!(leaderboard.get_untracked().entries, vec![entry("stale", 0, 0.0)]);
}
