//! Home page: greeting, the player's match history, and game mode shortcuts.

#[cfg(test)]
#[path = "main_page_test.rs"]
mod main_page_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::nav_bar::NavBar;
use crate::net::types::{GameMode, UserHistory};
use crate::router::AppRoute;
use crate::state::auth::AuthState;

/// `(label, value)` pairs for the history summary.
pub fn history_summary(history: &UserHistory) -> Vec<(&'static str, String)> {
    vec![
        ("Played", history.matches_played.to_string()),
        ("Won", history.matches_won.to_string()),
        ("Drawn", history.matches_drawn.to_string()),
        ("Lost", history.matches_lost.to_string()),
        ("Points", history.user_points.to_string()),
    ]
}

/// Greeting line, falling back to the email before the history has loaded.
pub fn greeting(state: &AuthState) -> String {
    if !state.user_history.username.is_empty() {
        format!("Welcome back, {}", state.user_history.username)
    } else if !state.email.is_empty() {
        format!("Welcome back, {}", state.email)
    } else {
        "Welcome to Trivela".to_owned()
    }
}

#[component]
pub fn MainPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let summary = move || {
        history_summary(&auth.get().user_history)
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="history__stat">
                        <span class="history__label">{label}</span>
                        <span class="history__value">{value}</span>
                    </div>
                }
            })
            .collect_view()
    };

    let modes = GameMode::ALL
        .into_iter()
        .map(|mode| {
            view! {
                <li>
                    <A href={AppRoute::GameList(mode).path()}>{mode.label()}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <NavBar/>
        <main class="main-page">
            <h1>{move || greeting(&auth.get())}</h1>
            <section class="history">{summary}</section>
            <section class="modes">
                <h2>"Play"</h2>
                <ul>
                    <li>
                        <A href={AppRoute::Trivia.path()}>"Trivia"</A>
                    </li>
                    {modes}
                </ul>
            </section>
        </main>
    }
}
