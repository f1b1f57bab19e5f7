//! Typed REST client for the Trivela backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! State actions call these methods and never touch the transport directly.
//! Every method maps a non-2xx status to [`ApiError::Status`] and an
//! unexpected body to [`ApiError::Decode`]; what to do with the error is the
//! caller's business.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{FetchClient, HttpClient, HttpRequest};
use super::types::{
    AuthStatus, GameMode, GameSummary, GamesResponse, LeaderboardEntry, LeaderboardResponse, ProfileUpdate,
    UserAccount,
};
use crate::config::ApiConfig;

pub const CHECK_AUTH_PATH: &str = "/check_auth/";
pub const LOGOUT_PATH: &str = "/logout/";
pub const LEADERBOARD_PATH: &str = "/leaderboard";
pub const USERS_PATH: &str = "/users/";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Backend client bound to one base URL and one transport.
#[derive(Clone, Debug)]
pub struct Api<C = FetchClient> {
    config: ApiConfig,
    client: C,
}

impl Api<FetchClient> {
    /// Browser client configured from the build environment.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env(), FetchClient)
    }
}

impl<C: HttpClient> Api<C> {
    pub fn new(config: ApiConfig, client: C) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /check_auth/`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx responses (the backend answers 403
    /// for anonymous sessions), and bodies that are not an auth status.
    pub async fn check_auth(&self) -> Result<AuthStatus, ApiError> {
        self.get_json(CHECK_AUTH_PATH).await
    }

    /// `POST /logout/` with the CSRF token echoed in a header.
    ///
    /// An empty token is rejected before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingCsrfToken`] for an empty token, otherwise
    /// transport and status errors.
    pub async fn logout(&self, csrf_token: &str) -> Result<(), ApiError> {
        let req = self
            .csrf_post(LOGOUT_PATH, csrf_token)?
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");
        let resp = self.client.send(req).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status));
        }
        Ok(())
    }

    /// List the games of one mode with the caller's progress on each.
    ///
    /// # Errors
    ///
    /// Transport, status, and decode errors.
    pub async fn fetch_games(&self, mode: GameMode) -> Result<Vec<GameSummary>, ApiError> {
        let body: GamesResponse = self.get_json(mode.endpoint()).await?;
        Ok(body.games)
    }

    /// `GET /leaderboard`.
    ///
    /// # Errors
    ///
    /// Transport, status, and decode errors.
    pub async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let body: LeaderboardResponse = self.get_json(LEADERBOARD_PATH).await?;
        Ok(body.leaderboard)
    }

    /// Fetch the signed-in account. The backend scopes the `users` listing
    /// to the current user, so at most one entry is expected.
    ///
    /// # Errors
    ///
    /// Transport, status, and decode errors.
    pub async fn fetch_account(&self) -> Result<Option<UserAccount>, ApiError> {
        let accounts: Vec<UserAccount> = self.get_json(USERS_PATH).await?;
        Ok(accounts.into_iter().next())
    }

    /// Update email and/or password of the signed-in account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingCsrfToken`] for an empty token, otherwise
    /// transport, status, and decode errors.
    pub async fn update_profile(&self, csrf_token: &str, update: &ProfileUpdate) -> Result<UserAccount, ApiError> {
        let req = self.csrf_post(USERS_PATH, csrf_token)?.json(update)?;
        let resp = self.client.send(req).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status));
        }
        resp.json()
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = HttpRequest::get(self.config.endpoint(path)).header("Content-Type", "application/json");
        let resp = self.client.send(req).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status));
        }
        resp.json()
    }

    fn csrf_post(&self, path: &str, csrf_token: &str) -> Result<HttpRequest, ApiError> {
        if csrf_token.is_empty() {
            return Err(ApiError::MissingCsrfToken);
        }
        Ok(HttpRequest::post(self.config.endpoint(path)).header(CSRF_HEADER, csrf_token))
    }
}
