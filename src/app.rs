//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::ApiClient;
use crate::pages::{
    edit::EditPage, gallery::GalleryPage, login::LoginPage, register::RegisterPage,
    upload::UploadPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session signal and the API client constructed over it, then
/// sets up client-side routing. The session is restored from persistent
/// storage exactly once, before any page's auth redirect can fire; pages
/// react to later session changes themselves (including the API client
/// clearing it on a 401).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    provide_context(ApiClient::new(session));

    // Restore any persisted session, then let pages decide where to go.
    Effect::new(move || {
        session.update(|s| s.restore(crate::util::storage::load_session()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/picturex.css"/>
        <Title text="PictureX"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=GalleryPage/>
                <Route path=StaticSegment("upload") view=UploadPage/>
                <Route path=(StaticSegment("edit"), ParamSegment("id")) view=EditPage/>
            </Routes>
        </Router>
    }
}
