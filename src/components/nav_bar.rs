//! Top navigation shown on every protected page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::GameMode;
use crate::router::AppRoute;
use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "csr")]
    let api = expect_context::<crate::net::api::Api>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::auth::logout(&api, auth).await;
                if !auth.get_untracked().is_authenticated {
                    navigate(crate::router::LANDING_PATH, leptos_router::NavigateOptions::default());
                }
            });
        }
    };

    let game_links = GameMode::ALL
        .into_iter()
        .map(|mode| view! { <A href={AppRoute::GameList(mode).path()}>{mode.label()}</A> })
        .collect_view();

    view! {
        <nav class="nav-bar">
            <A href={AppRoute::Main.path()}>"Trivela"</A>
            <A href={AppRoute::Trivia.path()}>"Trivia"</A>
            {game_links}
            <A href={AppRoute::Leaderboard.path()}>"Leaderboard"</A>
            <span class="nav-bar__spacer"></span>
            <A href={AppRoute::EditProfile.path()}>{move || auth.get().email}</A>
            <button class="btn nav-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </nav>
    }
}
