//! Route wrapper that runs the navigation guard before rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected `<Route>` view is wrapped in `RequireAuth`. The landing
//! page is not, so a failed check can always settle there.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::Api;
#[cfg(feature = "csr")]
use crate::router::{GuardOutcome, guard_navigation};
use crate::state::auth::AuthState;

/// Render `children` only once the guard lets the current path through.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    let location = use_location();

    // Known-authenticated sessions render immediately; the guard would
    // proceed without a request anyway.
    let allowed = RwSignal::new(auth.get_untracked().is_authenticated);

    Effect::new(move || {
        let path = location.pathname.get();
        let api = api.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match guard_navigation(&path, &api, auth).await {
                GuardOutcome::Proceed => allowed.set(true),
                GuardOutcome::Redirect(to) => {
                    allowed.set(false);
                    navigate(to, NavigateOptions { replace: true, ..Default::default() });
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, api, navigate);
        }
    });

    view! {
        <Show when=move || allowed.get()>
            {children()}
        </Show>
    }
}
