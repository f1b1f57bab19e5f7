//! Client route table and the authentication guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` declares the Leptos `<Routes>`; this module owns the route metadata
//! those views rely on: which paths exist, which of them need a signed-in
//! session, and what the guard does before a protected view renders.
//!
//! Matching follows the browser router defaults: static segments are
//! case-insensitive and a trailing slash is optional.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::http::HttpClient;
use crate::net::types::GameMode;
use crate::state::auth::{AuthState, check_authentication_status};

pub const LANDING_PATH: &str = "/landing/";

/// Every page the client can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Main,
    EditProfile,
    Trivia,
    GameList(GameMode),
    Game { mode: GameMode, game_id: String },
    Leaderboard,
    Landing,
}

impl AppRoute {
    /// Resolve a location path (query and fragment allowed) to a route.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Self::Main,
            [page] => match page.to_ascii_lowercase().as_str() {
                "edit-profile" => Self::EditProfile,
                "trivia" => Self::Trivia,
                "leaderboard" => Self::Leaderboard,
                "landing" => Self::Landing,
                other => Self::GameList(game_mode_for_segment(other)?),
            },
            [page, game_id] => Self::Game {
                mode: game_mode_for_segment(&page.to_ascii_lowercase())?,
                game_id: (*game_id).to_owned(),
            },
            _ => return None,
        };
        Some(route)
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Main => "/".to_owned(),
            Self::EditProfile => "/edit-profile/".to_owned(),
            Self::Trivia => "/trivia/".to_owned(),
            Self::GameList(mode) => mode.route_prefix().to_owned(),
            Self::Game { mode, game_id } => mode.game_path(game_id),
            Self::Leaderboard => "/leaderboard/".to_owned(),
            Self::Landing => LANDING_PATH.to_owned(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Main => "mainPage",
            Self::EditProfile => "editProfile",
            Self::Trivia => "trivia",
            Self::GameList(GameMode::BoxToBox) => "box2box",
            Self::GameList(GameMode::GuessTheSide) => "guessTheSide",
            Self::GameList(GameMode::CareerPath) => "careerPath",
            Self::Game { mode: GameMode::BoxToBox, .. } => "box2box_game",
            Self::Game { mode: GameMode::GuessTheSide, .. } => "guessTheSide_game",
            Self::Game { mode: GameMode::CareerPath, .. } => "CareerPath_game",
            Self::Leaderboard => "leaderboard",
            Self::Landing => "landing",
        }
    }

    /// Only the landing page is public.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Landing)
    }
}

fn game_mode_for_segment(segment: &str) -> Option<GameMode> {
    GameMode::ALL
        .into_iter()
        .find(|mode| mode.route_prefix().trim_matches('/').eq_ignore_ascii_case(segment))
}

/// What the guard decided for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    Redirect(&'static str),
}

/// Decide whether navigation to `path` may continue.
///
/// Public and unknown paths always proceed. A protected path proceeds
/// immediately when the session is already known to be authenticated;
/// otherwise one status check runs, and the user is sent to the landing page
/// if it still reports signed out.
pub async fn guard_navigation<C: HttpClient>(path: &str, api: &Api<C>, auth: RwSignal<AuthState>) -> GuardOutcome {
    let protected = AppRoute::parse(path).is_some_and(|route| route.requires_auth());
    if !protected || auth.with_untracked(|state| state.is_authenticated) {
        return GuardOutcome::Proceed;
    }

    check_authentication_status(api, auth).await;

    if auth.with_untracked(|state| state.is_authenticated) {
        GuardOutcome::Proceed
    } else {
        log::debug!("redirecting {path} to {LANDING_PATH}: not authenticated");
        GuardOutcome::Redirect(LANDING_PATH)
    }
}
