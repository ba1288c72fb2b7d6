//! Login page with a username/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::SessionUser;
use crate::state::session::SessionState;

/// Login page — posts credentials, stores the returned session, and
/// navigates to the gallery. Redirects there directly when a session is
/// already present.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let nav_submit = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    // Already authenticated — go straight to the gallery.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            error.set(Some("enter a username and password".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = nav_submit.clone();
            loading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match api.login(user.trim(), &pass).await {
                    Ok(resp) => {
                        let identity = SessionUser {
                            user_id: resp.user_id,
                            username: resp.username.clone(),
                        };
                        crate::util::storage::store_session(&resp.token, &identity);
                        session.update(|s| s.establish(resp));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        loading.set(false);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"PictureX"</h1>
                <h2 class="auth-card__subtitle">"Sign in"</h2>
                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                <form class="auth-card__form" on:submit=submit>
                    <label class="form-label">
                        "Username"
                        <input
                            class="form-input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-label">
                        "Password"
                        <input
                            class="form-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
