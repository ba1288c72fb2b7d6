//! Full-screen carousel over the gallery's selected images.

use leptos::prelude::*;

use crate::net::api::file_url;
use crate::state::gallery::GalleryState;

/// Overlay cycling through the selected images with wrap-around prev/next
/// buttons and a position indicator. Clicking the backdrop closes it.
#[component]
pub fn Carousel(gallery: RwSignal<GalleryState>) -> impl IntoView {
    let current_src = move || {
        gallery.with(|g| g.carousel_image().map(|img| file_url(&img.filename)))
    };

    let indicator = move || {
        gallery.with(|g| {
            g.carousel
                .map(|c| format!("{} / {}", c.index + 1, g.selection.len()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="carousel-overlay" on:click=move |_| gallery.update(GalleryState::close_carousel)>
            <div class="carousel" on:click=move |ev| ev.stop_propagation()>
                <button
                    class="carousel__close"
                    on:click=move |_| gallery.update(GalleryState::close_carousel)
                >
                    "×"
                </button>
                <button
                    class="carousel__prev"
                    on:click=move |_| gallery.update(GalleryState::carousel_prev)
                >
                    "‹"
                </button>
                {move || {
                    current_src()
                        .map(|src| view! { <img class="carousel__image" src=src alt="carousel"/> })
                }}
                <button
                    class="carousel__next"
                    on:click=move |_| gallery.update(GalleryState::carousel_next)
                >
                    "›"
                </button>
                <div class="carousel__indicator">{indicator}</div>
            </div>
        </div>
    }
}
