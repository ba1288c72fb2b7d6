//! Upload page: file picker with advisory validation and a multipart post.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
#[cfg(feature = "hydrate")]
use crate::net::api::ApiClient;
use crate::state::session::SessionState;
use crate::state::upload::{SelectedFile, UploadError};

/// Upload page — validates the chosen file (MIME prefix, 50 MB ceiling,
/// filename extension) before any network call, shows a local preview, and
/// submits a multipart form. Navigates back to the gallery on success.
#[component]
pub fn UploadPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let nav_submit = use_navigate();

    let file_input = NodeRef::<leptos::html::Input>::new();
    let selected = RwSignal::new(None::<SelectedFile>);
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            // Swapping the selection revokes the previous object URL, so
            // repeated picks do not leak blob URLs for the page lifetime.
            let set_selection = |next: Option<SelectedFile>| {
                let stale = selected
                    .try_update(|slot| crate::state::upload::swap_selection(slot, next))
                    .flatten();
                if let Some(url) = stale {
                    let _ = web_sys::Url::revoke_object_url(&url);
                }
            };

            let Some(input) = file_input.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                set_selection(None);
                return;
            };

            let candidate = SelectedFile {
                name: file.name(),
                mime: file.type_(),
                size: file.size(),
                preview_url: web_sys::Url::create_object_url_with_blob(&file).ok(),
            };
            if let Err(err) = candidate.validate() {
                error.set(Some(err.to_string()));
                input.set_value("");
                set_selection(None);
                return;
            }
            error.set(None);
            set_selection(Some(candidate));
        }
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(meta) = selected.get() else {
            error.set(Some(UploadError::NoFile.to_string()));
            return;
        };
        if let Err(err) = meta.validate() {
            error.set(Some(err.to_string()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                error.set(Some(UploadError::NoFile.to_string()));
                return;
            };

            let navigate = nav_submit.clone();
            let desc = description.get();
            uploading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match api.upload_image(&file, desc.trim()).await {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(err) => {
                        uploading.set(false);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <div class="upload-page">
            <NavBar/>
            <div class="upload-page__card">
                <h2 class="upload-page__title">"Upload an image"</h2>
                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                <form class="upload-page__form" on:submit=submit>
                    <label class="form-label">
                        "Choose an image"
                        <input
                            class="form-input"
                            type="file"
                            accept="image/*"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                    </label>
                    {move || {
                        selected
                            .get()
                            .and_then(|meta| meta.preview_url)
                            .map(|url| {
                                view! {
                                    <img class="upload-page__preview" src=url alt="preview"/>
                                }
                            })
                    }}
                    <label class="form-label">
                        "Description (optional)"
                        <textarea
                            class="form-input upload-page__description"
                            rows=4
                            placeholder="Describe the image..."
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || uploading.get() || selected.with(Option::is_none)
                    >
                        {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
