//! Trivia lobby page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::nav_bar::NavBar;
use crate::router::AppRoute;
use crate::state::auth::AuthState;

#[component]
pub fn TriviaPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let points = move || auth.with(|state| state.user_history.user_points);

    view! {
        <NavBar/>
        <main class="trivia">
            <h1>"Trivia"</h1>
            <p>"Head-to-head quiz: two players, ten questions. A win is worth 2 points, a draw 1."</p>
            <p class="trivia__points">{move || format!("Your points: {}", points())}</p>
            <A href={AppRoute::Leaderboard.path()}>"See the leaderboard"</A>
        </main>
    }
}
