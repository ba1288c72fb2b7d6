//! Registration page with client-side field validation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::api::ApiClient;
use crate::state::session::SessionState;
use crate::util::validate::validate_registration;

/// Registration page — validates username/password length and email shape
/// before issuing a single register call, then navigates to the login view.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let nav_submit = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    // Already authenticated — registration makes no sense, go to the gallery.
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
        let mail = email.get();

        // Advisory checks before any network call.
        if let Err(err) = validate_registration(&user, &pass, &mail) {
            error.set(Some(err.to_string()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = nav_submit.clone();
            loading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match api.register(&user, &pass, &mail).await {
                    Ok(()) => {
                        crate::util::browser::alert("Registration successful, please sign in");
                        navigate("/login", NavigateOptions::default());
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
            let _ = (user, pass, mail);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"PictureX"</h1>
                <h2 class="auth-card__subtitle">"Register"</h2>
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
                        "Email"
                        <input
                            class="form-input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
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
                        {move || if loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
