//! Edit-profile page: change email and/or password.
//!
//! A successful email change is mirrored into `AuthState` so the nav bar
//! shows the new address without another status check.

#[cfg(test)]
#[path = "edit_profile_test.rs"]
mod edit_profile_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::types::ProfileUpdate;
use crate::state::auth::AuthState;
use crate::state::profile::{ProfileState, SaveStatus};

/// Form-level validation before anything is sent.
pub fn validate(update: &ProfileUpdate, password_confirm: &str) -> Result<(), &'static str> {
    if update.is_empty() {
        return Err("Nothing to update.");
    }
    if let Some(email) = &update.email {
        if !email.contains('@') {
            return Err("Enter a valid email address.");
        }
    }
    if let Some(password) = &update.password {
        if password != password_confirm {
            return Err("Passwords do not match.");
        }
    }
    Ok(())
}

pub fn status_message(status: SaveStatus) -> &'static str {
    match status {
        SaveStatus::Idle => "",
        SaveStatus::Saving => "Saving...",
        SaveStatus::Saved => "Profile updated.",
        SaveStatus::Failed => "Could not update profile.",
    }
}

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    profile.update(|state| state.save_status = SaveStatus::Idle);

    #[cfg(feature = "csr")]
    let api = expect_context::<crate::net::api::Api>();
    #[cfg(feature = "csr")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            crate::state::profile::fetch_profile(&api, profile).await;
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if profile.with_untracked(|state| state.save_status == SaveStatus::Saving) {
            return;
        }
        let update = ProfileUpdate::from_form(&email.get_untracked(), &password.get_untracked());
        if let Err(msg) = validate(&update, &password_confirm.get_untracked()) {
            form_error.set(Some(msg));
            return;
        }
        form_error.set(None);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let new_email = update.email.clone();
                if crate::state::profile::save_profile(&api, profile, update).await {
                    if let Some(new_email) = new_email {
                        auth.update(|state| state.email = new_email);
                    }
                    password.set(String::new());
                    password_confirm.set(String::new());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (update, auth);
        }
    };

    let current_email = move || {
        profile
            .get()
            .account
            .map_or_else(|| auth.get().email, |account| account.email)
    };

    view! {
        <NavBar/>
        <main class="edit-profile">
            <h1>"Edit profile"</h1>
            <p class="edit-profile__current">{move || format!("Current email: {}", current_email())}</p>
            <form class="edit-profile__form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="New email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="New password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || password_confirm.get()
                    on:input=move |ev| password_confirm.set(event_target_value(&ev))
                />
                <button
                    class="btn"
                    type="submit"
                    disabled=move || profile.with(|state| state.save_status == SaveStatus::Saving)
                >
                    "Save"
                </button>
            </form>
            <Show when=move || form_error.get().is_some()>
                <p class="edit-profile__error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
            <p class="edit-profile__status">{move || status_message(profile.get().save_status)}</p>
        </main>
    }
}
