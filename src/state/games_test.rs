use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::testing::{ScriptedClient, url};

fn game(id: &str, status: &str) -> GameSummary {
    GameSummary { game_id: id.to_owned(), status: status.to_owned() }
}

fn seeded(mode: GameMode) -> RwSignal<GameListState> {
    RwSignal::new(GameListState { mode, games: vec![game("old", "completed")] })
}

// =============================================================
// GameLists
// =============================================================

#[test]
fn game_lists_start_empty_and_keyed_by_mode() {
    let lists = GameLists::new();
    for mode in GameMode::ALL {
        let state = lists.list(mode).get_untracked();
        assert_eq!(state.mode, mode);
        assert!(state.games.is_empty());
    }
}

// =============================================================
// fetch_games
// =============================================================

#[test]
fn fetch_clears_list_before_resolution() {
    let client = ScriptedClient::new();
    client.reply(200, r#"{"games": []}"#);
    let list = seeded(GameMode::BoxToBox);

    let pending = fetch_games(client.api(), list);
    assert!(list.get_untracked().games.is_empty());
    assert!(client.sent().is_empty());

    block_on(pending);
    assert_eq!(client.sent().len(), 1);
}

#[test]
fn fetch_replaces_list_with_response_games() {
    let client = ScriptedClient::new();
    client.reply(
        200,
        r#"{"games": [{"game_id": "1", "status": "available"}, {"game_id": 2, "status": "pending"}]}"#,
    );
    let list = seeded(GameMode::CareerPath);

    block_on(fetch_games(client.api(), list));

    assert_eq!(list.get_untracked().games, vec![game("1", "available"), game("2", "pending")]);
    assert_eq!(client.sent()[0].url, url("/career_path/game/"));
}

#[test]
fn fetch_failure_leaves_list_empty() {
    let client = ScriptedClient::new();
    client.reply(404, r#"{"error": "No games found"}"#);
    let list = seeded(GameMode::GuessTheSide);

    block_on(fetch_games(client.api(), list));

    assert!(list.get_untracked().games.is_empty());
}

#[test]
fn fetch_network_error_leaves_list_empty() {
    let client = ScriptedClient::new();
    client.fail(ApiError::Network("reset".to_owned()));
    let list = seeded(GameMode::BoxToBox);

    block_on(fetch_games(client.api(), list));

    assert!(list.get_untracked().games.is_empty());
}

#[test]
fn fetch_only_touches_its_own_mode() {
    let client = ScriptedClient::new();
    client.reply(200, r#"{"games": [{"game_id": "5", "status": "available"}]}"#);
    let lists = GameLists::new();
    lists.list(GameMode::CareerPath).update(|s| s.games.push(game("keep", "available")));

    block_on(fetch_games(client.api(), lists.list(GameMode::BoxToBox)));

    assert_eq!(lists.list(GameMode::BoxToBox).get_untracked().games, vec![game("5", "available")]);
    assert_eq!(lists.list(GameMode::CareerPath).get_untracked().games, vec![game("keep", "available")]);
}
