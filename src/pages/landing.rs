//! Public landing page. Login and signup forms are served by the backend.

use leptos::prelude::*;

use crate::net::api::Api;

pub const LOGIN_PATH: &str = "/login/";
pub const SIGNUP_PATH: &str = "/signup/";

#[component]
pub fn LandingPage() -> impl IntoView {
    let config = expect_context::<Api>().config().clone();
    let login_href = config.endpoint(LOGIN_PATH);
    let signup_href = config.endpoint(SIGNUP_PATH);

    view! {
        <main class="landing">
            <h1>"Trivela"</h1>
            <p class="landing__tagline">"Football trivia, head to head."</p>
            <div class="landing__actions">
                <a class="btn" href=login_href rel="external">
                    "Log in"
                </a>
                <a class="btn btn--secondary" href=signup_href rel="external">
                    "Sign up"
                </a>
            </div>
        </main>
    }
}
