//! Top navigation bar for the authenticated shell.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Navigation bar with gallery/upload links, the signed-in username, and a
/// logout button that clears the session and returns to the login view.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = move || {
        session.with(|s| s.username().map(ToOwned::to_owned)).unwrap_or_default()
    };

    let on_logout = move |_| {
        crate::util::storage::clear_session();
        session.update(SessionState::clear);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"PictureX"</span>
            <div class="nav-bar__links">
                <a class="nav-bar__link" href="/">"Gallery"</a>
                <a class="nav-bar__link" href="/upload">"Upload"</a>
                <span class="nav-bar__user">{username}</span>
                <button class="btn nav-bar__logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </nav>
    }
}
