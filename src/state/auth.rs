//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and identity-aware pages. The backend owns the
//! session; this container only mirrors the last successful status check.
//!
//! ERROR HANDLING
//! ==============
//! Failed calls are logged and leave the state untouched, so a flaky backend
//! shows stale data instead of signing the user out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::http::HttpClient;
use crate::net::types::{AuthStatus, UserHistory};
use crate::util::cookie;

/// Authentication state. Starts signed out at app launch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub email: String,
    pub user_history: UserHistory,
}

impl AuthState {
    /// Overwrite every field with a status-check response.
    pub fn apply_status(&mut self, status: AuthStatus) {
        self.is_authenticated = status.authenticated;
        self.email = status.user.email;
        self.user_history = status.history;
    }

    /// Mark the session as ended. Email and history are left as they were
    /// until the next status check.
    pub fn mark_logged_out(&mut self) {
        self.is_authenticated = false;
    }
}

/// Ask the backend whether the session cookie is still valid.
pub async fn check_authentication_status<C: HttpClient>(api: &Api<C>, auth: RwSignal<AuthState>) {
    match api.check_auth().await {
        Ok(status) => {
            log::debug!("auth status: authenticated={}", status.authenticated);
            auth.update(|state| state.apply_status(status));
        }
        Err(e) => log::error!("failed to check authentication status: {e}"),
    }
}

/// End the backend session using the CSRF token from `document.cookie`.
pub async fn logout<C: HttpClient>(api: &Api<C>, auth: RwSignal<AuthState>) {
    logout_with_token(api, auth, &cookie::csrf_token()).await;
}

/// End the backend session with an explicit CSRF token. Nothing is sent when
/// the token is empty.
pub async fn logout_with_token<C: HttpClient>(api: &Api<C>, auth: RwSignal<AuthState>, csrf_token: &str) {
    match api.logout(csrf_token).await {
        Ok(()) => auth.update(AuthState::mark_logged_out),
        Err(e) => log::error!("failed to log out: {e}"),
    }
}
