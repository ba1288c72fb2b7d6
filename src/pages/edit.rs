//! Edit page: metadata panel, crop/brightness/contrast submission, and tags.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::nav_bar::NavBar;
#[cfg(feature = "hydrate")]
use crate::net::api::ApiClient;
use crate::net::api::file_url;
use crate::state::edit::{
    BRIGHTNESS_MAX, BRIGHTNESS_MIN, CONTRAST_MAX, CONTRAST_MIN, EditState,
};
use crate::state::session::SessionState;

/// Edit page — fetches one image by route id and offers the three raster
/// operations plus tag management. Each crop/brightness/contrast submit
/// creates a new image server-side and navigates back to the gallery; tag
/// edits re-fetch in place.
#[component]
pub fn EditPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let nav_crop = use_navigate();
    #[cfg(feature = "hydrate")]
    let nav_brightness = use_navigate();
    #[cfg(feature = "hydrate")]
    let nav_contrast = use_navigate();

    let params = use_params_map();
    let edit = RwSignal::new(EditState::default());
    let tag_input = RwSignal::new(String::new());

    let image_id = move || params.read().get("id").and_then(|v| v.parse::<i64>().ok());

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = image_id() else {
                edit.update(|e| e.loading = false);
                return;
            };
            leptos::task::spawn_local(async move {
                match api.fetch_image(id).await {
                    Ok(record) => edit.update(|e| {
                        e.image = Some(record);
                        e.loading = false;
                    }),
                    Err(err) => {
                        edit.update(|e| e.loading = false);
                        crate::util::browser::alert(&format!("failed to load image: {err}"));
                    }
                }
            });
        }
    };

    // Fetch on mount and again when the route param changes.
    Effect::new(move || {
        let _ = image_id();
        edit.set(EditState::default());
        load();
    });

    // Arena-stored callbacks: these capture `use_navigate` handles and are
    // re-rendered inside `Show` children, so plain closures would not do.
    let apply_crop = Callback::new(move |()| {
        let rect = edit.with(|e| e.crop);
        if rect.is_empty() {
            crate::util::browser::alert("Select a crop area first");
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = image_id() else {
                return;
            };
            let navigate = nav_crop.clone();
            edit.update(|e| e.processing = true);
            leptos::task::spawn_local(async move {
                match api.crop_image(id, rect.rounded()).await {
                    Ok(()) => {
                        crate::util::browser::alert("Crop applied, a new image was created");
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        edit.update(|e| e.processing = false);
                        crate::util::browser::alert(&format!("crop failed: {err}"));
                    }
                }
            });
        }
    });

    let apply_brightness = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = image_id() else {
                return;
            };
            let value = edit.with(|e| e.brightness);
            let navigate = nav_brightness.clone();
            edit.update(|e| e.processing = true);
            leptos::task::spawn_local(async move {
                match api.adjust_brightness(id, value).await {
                    Ok(()) => {
                        crate::util::browser::alert(
                            "Brightness adjusted, a new image was created",
                        );
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        edit.update(|e| e.processing = false);
                        crate::util::browser::alert(&format!("adjustment failed: {err}"));
                    }
                }
            });
        }
    });

    let apply_contrast = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = image_id() else {
                return;
            };
            let value = edit.with(|e| e.contrast);
            let navigate = nav_contrast.clone();
            edit.update(|e| e.processing = true);
            leptos::task::spawn_local(async move {
                match api.adjust_contrast(id, value).await {
                    Ok(()) => {
                        crate::util::browser::alert("Contrast adjusted, a new image was created");
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        edit.update(|e| e.processing = false);
                        crate::util::browser::alert(&format!("adjustment failed: {err}"));
                    }
                }
            });
        }
    });

    let add_tag = move || {
        let name = tag_input.get().trim().to_owned();
        if name.is_empty() {
            crate::util::browser::alert("Enter a tag name");
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = image_id() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match api.add_tag(id, &name).await {
                    Ok(()) => {
                        tag_input.set(String::new());
                        load();
                    }
                    Err(err) => crate::util::browser::alert(&format!("failed to add tag: {err}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    };

    let remove_tag = move |name: String| {
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = image_id() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match api.remove_tag(id, &name).await {
                    Ok(()) => load(),
                    Err(err) => {
                        crate::util::browser::alert(&format!("failed to remove tag: {err}"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    };

    let processing = move || edit.with(|e| e.processing);
    let image_src = move || {
        edit.with(|e| e.image.as_ref().map(|img| file_url(&img.filename)))
            .unwrap_or_default()
    };

    view! {
        <div class="edit-page">
            <NavBar/>

            <Show when=move || edit.with(|e| e.loading)>
                <p class="edit-page__loading">"Loading..."</p>
            </Show>

            <Show when=move || edit.with(|e| !e.loading && e.image.is_none())>
                <p class="edit-page__missing">"Image not found"</p>
            </Show>

            <Show when=move || edit.with(|e| e.image.is_some())>
                <div class="edit-page__layout">
                    <div class="edit-page__preview">
                        <img class="edit-page__image" src=image_src alt="editing"/>
                    </div>

                    <div class="edit-page__controls">
                        <section class="edit-section">
                            <h3 class="edit-section__title">"Crop"</h3>
                            <div class="edit-section__rect">
                                <CropField label="X" value=Signal::derive(move || edit.with(|e| e.crop.x))
                                    on_change=Callback::new(move |v| edit.update(|e| e.crop.x = v))/>
                                <CropField label="Y" value=Signal::derive(move || edit.with(|e| e.crop.y))
                                    on_change=Callback::new(move |v| edit.update(|e| e.crop.y = v))/>
                                <CropField label="Width" value=Signal::derive(move || edit.with(|e| e.crop.width))
                                    on_change=Callback::new(move |v| edit.update(|e| e.crop.width = v))/>
                                <CropField label="Height" value=Signal::derive(move || edit.with(|e| e.crop.height))
                                    on_change=Callback::new(move |v| edit.update(|e| e.crop.height = v))/>
                            </div>
                            <button class="btn btn--primary" on:click=move |_| apply_crop.run(()) disabled=processing>
                                {move || if processing() { "Processing..." } else { "Apply crop" }}
                            </button>
                        </section>

                        <section class="edit-section">
                            <h3 class="edit-section__title">
                                {move || format!("Brightness: {:.1}", edit.with(|e| e.brightness))}
                            </h3>
                            <input
                                class="edit-section__slider"
                                type="range"
                                min=BRIGHTNESS_MIN
                                max=BRIGHTNESS_MAX
                                step="0.1"
                                prop:value=move || edit.with(|e| e.brightness).to_string()
                                on:input=move |ev| {
                                    if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                        edit.update(|e| e.set_brightness(v));
                                    }
                                }
                            />
                            <button class="btn btn--primary" on:click=move |_| apply_brightness.run(()) disabled=processing>
                                {move || if processing() { "Processing..." } else { "Apply brightness" }}
                            </button>
                        </section>

                        <section class="edit-section">
                            <h3 class="edit-section__title">
                                {move || format!("Contrast: {}%", edit.with(|e| e.contrast))}
                            </h3>
                            <input
                                class="edit-section__slider"
                                type="range"
                                min=CONTRAST_MIN
                                max=CONTRAST_MAX
                                step="5"
                                prop:value=move || edit.with(|e| e.contrast).to_string()
                                on:input=move |ev| {
                                    if let Ok(v) = event_target_value(&ev).parse::<i32>() {
                                        edit.update(|e| e.set_contrast(v));
                                    }
                                }
                            />
                            <button class="btn btn--primary" on:click=move |_| apply_contrast.run(()) disabled=processing>
                                {move || if processing() { "Processing..." } else { "Apply contrast" }}
                            </button>
                        </section>

                        <section class="edit-section">
                            <h3 class="edit-section__title">"Tags"</h3>
                            <div class="edit-section__tag-row">
                                <input
                                    class="form-input"
                                    type="text"
                                    placeholder="Tag name"
                                    prop:value=move || tag_input.get()
                                    on:input=move |ev| tag_input.set(event_target_value(&ev))
                                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            add_tag();
                                        }
                                    }
                                />
                                <button class="btn" on:click=move |_| add_tag()>
                                    "Add"
                                </button>
                            </div>
                            <div class="edit-section__tags">
                                {move || {
                                    edit.with(|e| {
                                            e.image.as_ref().map(|img| img.tags.clone())
                                        })
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|tag| {
                                            let name = tag.name.clone();
                                            view! {
                                                <span class="edit-section__tag">
                                                    {tag.name.clone()}
                                                    <button
                                                        class="edit-section__tag-remove"
                                                        on:click=move |_| remove_tag(name.clone())
                                                    >
                                                        "×"
                                                    </button>
                                                </span>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </section>

                        <section class="edit-section">
                            <h3 class="edit-section__title">"Details"</h3>
                            <MetadataPanel edit=edit/>
                        </section>

                        <a class="btn edit-page__back" href="/">
                            "Back to gallery"
                        </a>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Numeric input for one crop rectangle coordinate.
#[component]
fn CropField(
    label: &'static str,
    value: Signal<f64>,
    on_change: Callback<f64>,
) -> impl IntoView {
    view! {
        <label class="edit-section__crop-field">
            {label}
            <input
                class="form-input"
                type="number"
                min="0"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    let v = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                    on_change.run(v);
                }
            />
        </label>
    }
}

/// Read-only metadata for the loaded image: dimensions, size, EXIF fields,
/// and the description.
#[component]
fn MetadataPanel(edit: RwSignal<EditState>) -> impl IntoView {
    view! {
        <div class="edit-page__metadata">
            {move || {
                edit.with(|e| e.image.clone())
                    .map(|image| {
                        view! {
                            <p>
                                <strong>"Filename: "</strong>
                                {image.original_filename.clone()}
                            </p>
                            {image
                                .width
                                .zip(image.height)
                                .map(|(w, h)| {
                                    view! { <p><strong>"Dimensions: "</strong> {format!("{w} × {h}")}</p> }
                                })}
                            {image
                                .file_size_mb()
                                .map(|size| view! { <p><strong>"Size: "</strong> {size}</p> })}
                            {image
                                .exif_date
                                .clone()
                                .map(|date| view! { <p><strong>"Taken: "</strong> {date}</p> })}
                            {image
                                .exif_location
                                .clone()
                                .map(|loc| view! { <p><strong>"Location: "</strong> {loc}</p> })}
                            {image
                                .exif_camera
                                .clone()
                                .map(|cam| view! { <p><strong>"Camera: "</strong> {cam}</p> })}
                            {image
                                .description
                                .clone()
                                .map(|desc| {
                                    view! { <p><strong>"Description: "</strong> {desc}</p> }
                                })}
                        }
                    })
            }}
        </div>
    }
}
