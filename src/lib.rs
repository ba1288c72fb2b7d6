//! # picturex-client
//!
//! Leptos + WASM browser client for the PictureX image-management service.
//! Every screen is a thin view over the service's REST API: registration,
//! login, gallery browsing, uploads, tag edits, and raster adjustments
//! (crop, brightness, contrast) all delegate to the server.
//!
//! The crate contains pages, components, per-domain application state,
//! wire types, and the authenticated API client. Image processing itself
//! happens server-side; nothing here decodes pixels.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
