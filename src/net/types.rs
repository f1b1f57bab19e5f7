//! Wire DTOs for the Trivela backend.
//!
//! DESIGN
//! ======
//! Bodies are decoded as-is; the client does not validate them beyond what
//! serde needs to build the struct. The one quirk is `game_id`, which the
//! backend sends as a string for some game modes and as a number for others.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Per-user match summary shown on the main page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHistory {
    pub username: String,
    pub matches_played: i64,
    pub matches_won: i64,
    pub matches_drawn: i64,
    pub matches_lost: i64,
    pub user_points: i64,
}

/// Identity part of the `/check_auth/` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub email: String,
}

/// Body of `GET /check_auth/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub user: SessionUser,
    pub history: UserHistory,
}

/// The three single-player game modes. Each has its own catalogue endpoint
/// and its own client route prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    BoxToBox,
    CareerPath,
    GuessTheSide,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::BoxToBox, GameMode::CareerPath, GameMode::GuessTheSide];

    /// Backend path listing this mode's games.
    pub fn endpoint(self) -> &'static str {
        match self {
            GameMode::BoxToBox => "/box2box/game/",
            GameMode::CareerPath => "/career_path/game/",
            GameMode::GuessTheSide => "/guess_the_side/game/",
        }
    }

    /// Client route prefix, e.g. `/box2box/`.
    pub fn route_prefix(self) -> &'static str {
        match self {
            GameMode::BoxToBox => "/box2box/",
            GameMode::CareerPath => "/CareerPath/",
            GameMode::GuessTheSide => "/GuessTheSide/",
        }
    }

    /// Client route for one game of this mode.
    pub fn game_path(self, game_id: &str) -> String {
        format!("{}{game_id}", self.route_prefix())
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::BoxToBox => "Box-to-Box",
            GameMode::CareerPath => "Career Path",
            GameMode::GuessTheSide => "Guess the Side",
        }
    }
}

/// One playable game in a mode's catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub game_id: String,
    /// `"available"`, `"pending"` or `"completed"`.
    pub status: String,
}

/// Body of the per-mode `GET .../game/` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesResponse {
    pub games: Vec<GameSummary>,
}

/// One ranked user on the leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub matches_played: i64,
    pub matches_won: i64,
    pub matches_drawn: i64,
    pub matches_lost: i64,
    pub total_points: i64,
    /// Percentage of played matches won, already rounded server-side.
    pub win_percentage: f64,
}

/// Body of `GET /leaderboard`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// The signed-in account as exposed by the `users` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// Edit-profile payload. Absent fields are left untouched by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    /// Build an update from raw form input; blank fields are dropped.
    pub fn from_form(email: &str, password: &str) -> Self {
        let email = email.trim();
        Self {
            email: (!email.is_empty()).then(|| email.to_owned()),
            // Passwords are sent verbatim; only an empty field means "unchanged".
            password: (!password.is_empty()).then(|| password.to_owned()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
