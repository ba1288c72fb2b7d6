//! Gallery page: image grid with search, selection, and the carousel.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::carousel::Carousel;
use crate::components::image_card::ImageCard;
use crate::components::nav_bar::NavBar;
#[cfg(feature = "hydrate")]
use crate::net::api::ApiClient;
use crate::state::gallery::GalleryState;
use crate::state::session::SessionState;

/// Gallery page — loads the image list on mount and offers keyword/date
/// search, per-image selection and deletion, and a carousel over the
/// selection. Redirects to `/login` when the session is absent.
///
/// Load, search, and reset share one generation counter in `GalleryState`,
/// so whichever request was issued last wins regardless of arrival order.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let gallery = RwSignal::new(GalleryState::default());
    let keyword = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());

    // Redirect to login if not authenticated, including after a 401 cleared
    // the session mid-view.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let load_all = move || {
        #[cfg(feature = "hydrate")]
        {
            let seq = gallery.try_update(GalleryState::begin_request).unwrap_or_default();
            leptos::task::spawn_local(async move {
                let result = api.list_images().await.map_err(|e| e.to_string());
                gallery.update(|g| {
                    g.apply_response(seq, result);
                });
            });
        }
    };

    // Initial load on mount.
    Effect::new(move || load_all());

    let run_search = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let kw = keyword.get();
            let start = start_date.get();
            let end = end_date.get();
            let seq = gallery.try_update(GalleryState::begin_request).unwrap_or_default();
            leptos::task::spawn_local(async move {
                let result = api
                    .search_images(&kw, &start, &end)
                    .await
                    .map_err(|e| e.to_string());
                gallery.update(|g| {
                    g.apply_response(seq, result);
                });
            });
        }
    };

    let on_reset = move |_| load_all();

    let on_toggle = Callback::new(move |id: i64| {
        gallery.update(|g| g.toggle_selection(id));
    });

    let on_delete = Callback::new(move |id: i64| {
        if !crate::util::browser::confirm("Delete this image?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api.delete_image(id).await {
                    Ok(()) => load_all(),
                    Err(err) => crate::util::browser::alert(&format!("delete failed: {err}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_carousel = move |_| {
        let started = gallery.try_update(GalleryState::start_carousel).unwrap_or(false);
        if !started {
            crate::util::browser::alert("Select images to play first");
        }
    };

    view! {
        <div class="gallery-page">
            <NavBar/>
            <div class="gallery-page__search">
                <input
                    class="gallery-page__keyword"
                    type="text"
                    placeholder="Search keyword..."
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <input
                    class="gallery-page__date"
                    type="date"
                    prop:value=move || start_date.get()
                    on:input=move |ev| start_date.set(event_target_value(&ev))
                />
                <input
                    class="gallery-page__date"
                    type="date"
                    prop:value=move || end_date.get()
                    on:input=move |ev| end_date.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=run_search>
                    "Search"
                </button>
                <button class="btn" on:click=on_reset>
                    "Reset"
                </button>
                <Show when=move || !gallery.with(|g| g.selection.is_empty())>
                    <button class="btn btn--accent" on:click=on_carousel>
                        {move || format!("Play selected ({})", gallery.with(|g| g.selection.len()))}
                    </button>
                </Show>
            </div>

            {move || {
                gallery
                    .with(|g| g.error.clone())
                    .map(|msg| view! { <div class="form-error">{msg}</div> })
            }}

            <Show when=move || gallery.with(|g| g.loading)>
                <p class="gallery-page__loading">"Loading images..."</p>
            </Show>

            <div class="gallery-page__grid">
                {move || {
                    gallery
                        .get()
                        .images
                        .into_iter()
                        .map(|image| {
                            let id = image.id;
                            let selected = Signal::derive(move || {
                                gallery.with(|g| g.is_selected(id))
                            });
                            view! {
                                <ImageCard
                                    image=image
                                    selected=selected
                                    on_toggle=on_toggle
                                    on_delete=on_delete
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || gallery.with(|g| !g.loading && g.images.is_empty() && g.error.is_none())>
                <div class="gallery-page__empty">
                    "No images yet — " <a href="/upload">"upload one"</a>
                </div>
            </Show>

            <Show when=move || gallery.with(|g| g.carousel.is_some())>
                <Carousel gallery=gallery/>
            </Show>
        </div>
    }
}
