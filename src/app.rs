//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::net::api::Api;
use crate::net::types::GameMode;
use crate::pages::{
    edit_profile::EditProfilePage,
    games::{GameListPage, GamePage},
    landing::LandingPage,
    leaderboard::LeaderboardPage,
    main_page::MainPage,
    trivia::TriviaPage,
};
use crate::state::{auth::AuthState, games::GameLists, leaderboard::LeaderboardState, profile::ProfileState};

/// Root application component.
///
/// Provides the API client and every state container as context, then sets up
/// client-side routing. All routes except `/landing/` sit behind
/// [`RequireAuth`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Api::from_env());
    provide_context(RwSignal::new(AuthState::default()));
    provide_context(GameLists::new());
    provide_context(RwSignal::new(LeaderboardState::default()));
    provide_context(RwSignal::new(ProfileState::default()));

    view! {
        <Title text="Trivela"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <RequireAuth><MainPage/></RequireAuth> }/>
                <Route
                    path=StaticSegment("edit-profile")
                    view=|| view! { <RequireAuth><EditProfilePage/></RequireAuth> }
                />
                <Route path=StaticSegment("trivia") view=|| view! { <RequireAuth><TriviaPage/></RequireAuth> }/>

                <Route
                    path=StaticSegment("box2box")
                    view=|| view! { <RequireAuth><GameListPage mode=GameMode::BoxToBox/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("box2box"), ParamSegment("gameID"))
                    view=|| view! { <RequireAuth><GamePage mode=GameMode::BoxToBox/></RequireAuth> }
                />

                <Route
                    path=StaticSegment("GuessTheSide")
                    view=|| view! { <RequireAuth><GameListPage mode=GameMode::GuessTheSide/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("GuessTheSide"), ParamSegment("gameID"))
                    view=|| view! { <RequireAuth><GamePage mode=GameMode::GuessTheSide/></RequireAuth> }
                />

                <Route
                    path=StaticSegment("CareerPath")
                    view=|| view! { <RequireAuth><GameListPage mode=GameMode::CareerPath/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("CareerPath"), ParamSegment("gameID"))
                    view=|| view! { <RequireAuth><GamePage mode=GameMode::CareerPath/></RequireAuth> }
                />

                <Route
                    path=StaticSegment("leaderboard")
                    view=|| view! { <RequireAuth><LeaderboardPage/></RequireAuth> }
                />

                <Route path=StaticSegment("landing") view=LandingPage/>
            </Routes>
        </Router>
    }
}
