//! Card component for one gallery image.

use leptos::prelude::*;

use crate::net::api::{file_url, thumbnail_url};
use crate::net::types::ImageRecord;

/// Gallery card: selection checkbox, thumbnail linking to the edit view,
/// metadata summary, and a delete button.
///
/// The thumbnail falls back to the full-size file URL when the server has
/// no thumbnail for the image.
#[component]
pub fn ImageCard(
    image: ImageRecord,
    selected: Signal<bool>,
    on_toggle: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = image.id;
    let src = RwSignal::new(thumbnail_url(&image.filename));
    let full_src = file_url(&image.filename);
    let alt = image.original_filename.clone();
    let dimensions = image
        .width
        .zip(image.height)
        .map(|(w, h)| format!("{w} × {h}"));

    view! {
        <div class="image-card">
            <input
                class="image-card__select"
                type="checkbox"
                prop:checked=move || selected.get()
                on:change=move |_| on_toggle.run(id)
            />
            <a class="image-card__link" href=format!("/edit/{id}")>
                <img
                    class="image-card__thumb"
                    src=move || src.get()
                    alt=alt
                    on:error=move |_| src.set(full_src.clone())
                />
            </a>
            <div class="image-card__info">
                <p class="image-card__filename">{image.original_filename.clone()}</p>
                {dimensions.map(|d| view! { <p class="image-card__dimensions">{d}</p> })}
                {image
                    .exif_date
                    .clone()
                    .map(|date| view! { <p class="image-card__exif">"Taken: " {date}</p> })}
                {image
                    .exif_location
                    .clone()
                    .map(|loc| view! { <p class="image-card__exif">"Location: " {loc}</p> })}
                {(!image.tags.is_empty())
                    .then(|| {
                        view! {
                            <div class="image-card__tags">
                                {image
                                    .tags
                                    .iter()
                                    .map(|tag| {
                                        view! {
                                            <span class="image-card__tag">{tag.name.clone()}</span>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })}
            </div>
            <button class="btn btn--danger image-card__delete" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </div>
    }
}
