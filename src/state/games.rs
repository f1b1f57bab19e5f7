//! Game catalogue state, one list per game mode.
//!
//! DESIGN
//! ======
//! Box-to-Box, Career Path and Guess the Side lists have identical shape and
//! behavior, so a single container type keyed by [`GameMode`] serves all
//! three. [`GameLists`] bundles the three signals so they can be provided as
//! one context value.

#[cfg(test)]
#[path = "games_test.rs"]
mod games_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::http::HttpClient;
use crate::net::types::{GameMode, GameSummary};

/// The games of one mode, as last reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameListState {
    pub mode: GameMode,
    pub games: Vec<GameSummary>,
}

impl GameListState {
    pub fn new(mode: GameMode) -> Self {
        Self { mode, games: Vec::new() }
    }
}

/// One list signal per game mode.
#[derive(Clone, Copy, Debug)]
pub struct GameLists {
    box_to_box: RwSignal<GameListState>,
    career_path: RwSignal<GameListState>,
    guess_the_side: RwSignal<GameListState>,
}

impl GameLists {
    pub fn new() -> Self {
        Self {
            box_to_box: RwSignal::new(GameListState::new(GameMode::BoxToBox)),
            career_path: RwSignal::new(GameListState::new(GameMode::CareerPath)),
            guess_the_side: RwSignal::new(GameListState::new(GameMode::GuessTheSide)),
        }
    }

    pub fn list(self, mode: GameMode) -> RwSignal<GameListState> {
        match mode {
            GameMode::BoxToBox => self.box_to_box,
            GameMode::CareerPath => self.career_path,
            GameMode::GuessTheSide => self.guess_the_side,
        }
    }
}

impl Default for GameLists {
    fn default() -> Self {
        Self::new()
    }
}

/// Refresh a mode's game list.
///
/// The list is emptied right away, before the returned future is polled, so
/// the page never shows the previous catalogue while the request is in
/// flight. On failure the list stays empty.
pub fn fetch_games<C: HttpClient>(api: Api<C>, list: RwSignal<GameListState>) -> impl Future<Output = ()> {
    list.update(|state| state.games.clear());
    async move {
        let mode = list.with_untracked(|state| state.mode);
        match api.fetch_games(mode).await {
            Ok(games) => {
                log::debug!("fetched {} {} games", games.len(), mode.label());
                list.update(|state| state.games = games);
            }
            Err(e) => log::error!("fetching {} games failed: {e}", mode.label()),
        }
    }
}
