//! Edit-profile state: the signed-in account and the outcome of the last save.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::http::HttpClient;
use crate::net::types::{ProfileUpdate, UserAccount};
use crate::util::cookie;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub account: Option<UserAccount>,
    pub save_status: SaveStatus,
}

/// Load the signed-in account. Failures keep whatever was loaded before.
pub async fn fetch_profile<C: HttpClient>(api: &Api<C>, profile: RwSignal<ProfileState>) {
    match api.fetch_account().await {
        Ok(account) => profile.update(|state| state.account = account),
        Err(e) => log::error!("fetching profile failed: {e}"),
    }
}

/// Save profile changes using the CSRF token from `document.cookie`.
/// Returns `true` when the backend accepted the update.
pub async fn save_profile<C: HttpClient>(api: &Api<C>, profile: RwSignal<ProfileState>, update: ProfileUpdate) -> bool {
    save_profile_with_token(api, profile, update, &cookie::csrf_token()).await
}

/// Save profile changes with an explicit CSRF token. An empty token fails
/// without sending anything.
pub async fn save_profile_with_token<C: HttpClient>(
    api: &Api<C>,
    profile: RwSignal<ProfileState>,
    update: ProfileUpdate,
    csrf_token: &str,
) -> bool {
    profile.update(|state| state.save_status = SaveStatus::Saving);
    match api.update_profile(csrf_token, &update).await {
        Ok(account) => {
            profile.update(|state| {
                state.account = Some(account);
                state.save_status = SaveStatus::Saved;
            });
            true
        }
        Err(e) => {
            log::error!("saving profile failed: {e}");
            profile.update(|state| state.save_status = SaveStatus::Failed);
            false
        }
    }
}
