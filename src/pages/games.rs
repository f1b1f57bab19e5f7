//! Per-mode game catalogue page and the single-game route shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component serves all three modes; the route passes the `GameMode` and
//! the page picks its list signal from `GameLists`. Gameplay itself happens
//! against the backend once a game route is open.

#[cfg(test)]
#[path = "games_test.rs"]
mod games_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;
use crate::net::types::{GameMode, GameSummary};
use crate::router::AppRoute;
use crate::state::games::GameLists;

/// Button text for a game given its backend status.
pub fn action_label(status: &str) -> &'static str {
    match status {
        "available" => "Play",
        "pending" => "Resume",
        "completed" => "Completed",
        _ => "Open",
    }
}

/// Completed games cannot be replayed.
pub fn is_playable(game: &GameSummary) -> bool {
    game.status != "completed"
}

#[component]
pub fn GameListPage(mode: GameMode) -> impl IntoView {
    let list = expect_context::<GameLists>().list(mode);

    #[cfg(feature = "csr")]
    {
        let api = expect_context::<crate::net::api::Api>();
        leptos::task::spawn_local(crate::state::games::fetch_games(api, list));
    }

    let games = move || {
        list.get()
            .games
            .into_iter()
            .map(|game| {
                let href = mode.game_path(&game.game_id);
                let label = action_label(&game.status);
                let title = format!("{} #{}", mode.label(), game.game_id);
                let action = if is_playable(&game) {
                    view! { <A href=href>{label}</A> }.into_any()
                } else {
                    view! { <span class="game-list__done">{label}</span> }.into_any()
                };
                view! {
                    <li class="game-list__item">
                        <span>{title}</span>
                        {action}
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <NavBar/>
        <main class="game-list">
            <h1>{mode.label()}</h1>
            <Show when=move || !list.with(|s| s.games.is_empty()) fallback=|| view! { <p>"No games yet."</p> }>
                <ul>{games}</ul>
            </Show>
        </main>
    }
}

#[component]
pub fn GamePage(mode: GameMode) -> impl IntoView {
    let params = use_params_map();
    let game_id = move || params.read().get("gameID").unwrap_or_default();

    view! {
        <NavBar/>
        <main class="game">
            <h1>{move || format!("{} #{}", mode.label(), game_id())}</h1>
            <A href={AppRoute::GameList(mode).path()}>"Back to games"</A>
        </main>
    }
}
