//! Authenticated REST client for the PictureX API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning [`ApiError::Unavailable`] since every endpoint
//! is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! All failures surface to the caller as [`ApiError`] and are scoped to the
//! view that issued the call. The one global side effect lives here: a 401
//! from any endpoint clears the session signal, and the pages observing it
//! redirect to the login view. Transport never touches navigation directly.
//! Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::{GetUntracked, Update};

use crate::net::types::{CropRequest, ImageRecord, LoginResponse};
use crate::state::session::SessionState;

/// Root path of the REST API, same origin as the page.
pub const API_BASE: &str = "/api";

/// Default per-call budget.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Large-file uploads get a longer budget.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);
/// Gallery list/search reads are expected to answer quickly.
pub const LIST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error taxonomy for API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request timed out, check your network connection")]
    Timeout,
    #[error("could not reach the server: {0}")]
    Network(String),
    #[error("not authorized, please log in again")]
    Unauthorized,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response from the server: {0}")]
    Decode(String),
    #[error("not available on the server")]
    Unavailable,
}

/// Single point of egress for all backend calls.
///
/// Holds the session signal it was constructed with; the bearer token is
/// read from it on every request and cleared on any 401 response.
#[derive(Clone, Copy)]
pub struct ApiClient {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    session: RwSignal<SessionState>,
}

impl ApiClient {
    pub fn new(session: RwSignal<SessionState>) -> Self {
        Self { session }
    }

    /// `POST /auth/login` — establishes no session itself; the caller
    /// stores the returned token and identity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "username": username, "password": password });
            let resp = self.post_json("/auth/login", &body, DEFAULT_TIMEOUT).await?;
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response;
    /// the message is taken from the server's `{error}` body when present.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({
                "username": username,
                "password": password,
                "email": email,
            });
            self.post_json("/auth/register", &body, DEFAULT_TIMEOUT).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password, email);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /images` — the full gallery for the session's owner.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    pub async fn list_images(&self) -> Result<Vec<ImageRecord>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json("/images", LIST_TIMEOUT).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /images/search` with optional keyword and date bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    pub async fn search_images(
        &self,
        keyword: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<ImageRecord>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json(&search_path(keyword, start_date, end_date), LIST_TIMEOUT)
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (keyword, start_date, end_date);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /images/{id}` — one image with tags and EXIF fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    pub async fn fetch_image(&self, id: i64) -> Result<ImageRecord, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json(&format!("/images/{id}"), DEFAULT_TIMEOUT).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE /images/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    pub async fn delete_image(&self, id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = self
                .authorize(gloo_net::http::Request::delete(&api_url(&format!("/images/{id}"))))
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.dispatch(req, DEFAULT_TIMEOUT).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /images/upload` — multipart form with `file` and an optional
    /// `description` field. No explicit content-type is set: the browser
    /// supplies the multipart boundary itself.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    #[cfg(feature = "hydrate")]
    pub async fn upload_image(
        &self,
        file: &web_sys::File,
        description: &str,
    ) -> Result<(), ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("failed to build form data".to_owned()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Network("failed to attach file".to_owned()))?;
        if !description.is_empty() {
            form.append_with_str("description", description)
                .map_err(|_| ApiError::Network("failed to attach description".to_owned()))?;
        }

        let req = self
            .authorize(gloo_net::http::Request::post(&api_url("/images/upload")))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.dispatch(req, UPLOAD_TIMEOUT).await?;
        Ok(())
    }

    /// `POST /images/{id}/crop` with an already-rounded rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    pub async fn crop_image(&self, id: i64, rect: CropRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json(&format!("/images/{id}/crop"), &rect, DEFAULT_TIMEOUT)
                .await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, rect);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /images/{id}/adjust-brightness` with a 0.5–2.0 factor.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    pub async fn adjust_brightness(&self, id: i64, brightness: f64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "brightness": brightness });
            self.post_json(&format!("/images/{id}/adjust-brightness"), &body, DEFAULT_TIMEOUT)
                .await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, brightness);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /images/{id}/adjust-contrast` with a 50–150 percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    pub async fn adjust_contrast(&self, id: i64, contrast: i32) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "contrast": contrast });
            self.post_json(&format!("/images/{id}/adjust-contrast"), &body, DEFAULT_TIMEOUT)
                .await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, contrast);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /images/{id}/tags`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    pub async fn add_tag(&self, id: i64, tag_name: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "tagName": tag_name });
            self.post_json(&format!("/images/{id}/tags"), &body, DEFAULT_TIMEOUT)
                .await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, tag_name);
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE /images/{id}/tags/{tagName}` with the name percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    pub async fn remove_tag(&self, id: i64, tag_name: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let path = format!("/images/{id}/tags/{}", encode_component(tag_name));
            let req = self
                .authorize(gloo_net::http::Request::delete(&api_url(&path)))
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.dispatch(req, DEFAULT_TIMEOUT).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, tag_name);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
impl ApiClient {
    /// Attach the bearer header when a session token is present.
    fn authorize(&self, req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.session.get_untracked().token {
            Some(token) if !token.is_empty() => req.header("Authorization", &bearer_header(&token)),
            _ => req,
        }
    }

    /// Send a built request and apply the shared response policy.
    ///
    /// A 401 from any endpoint clears the session signal before returning
    /// [`ApiError::Unauthorized`]; other non-2xx statuses carry a message
    /// derived from the response body.
    async fn dispatch(
        &self,
        req: gloo_net::http::Request,
        timeout: Duration,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let Some(sent) = with_timeout(timeout, req.send()).await else {
            return Err(ApiError::Timeout);
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        if resp.status() == 401 {
            crate::util::storage::clear_session();
            self.session.update(SessionState::clear);
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: resp.status(),
                message: error_message(resp.status(), &body),
            });
        }
        Ok(resp)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        timeout: Duration,
    ) -> Result<T, ApiError> {
        let req = self
            .authorize(gloo_net::http::Request::get(&api_url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = self.dispatch(req, timeout).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let req = self
            .authorize(gloo_net::http::Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.dispatch(req, timeout).await
    }
}

/// Race a future against the per-call budget.
#[cfg(feature = "hydrate")]
async fn with_timeout<F, T>(timeout: Duration, fut: F) -> Option<T>
where
    F: std::future::Future<Output = T>,
{
    use futures::future::Either;

    match futures::future::select(Box::pin(fut), Box::pin(gloo_timers::future::sleep(timeout)))
        .await
    {
        Either::Left((value, _)) => Some(value),
        Either::Right(((), _)) => None,
    }
}

/// Prefix a path with the API base.
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// URL of the full-size image bytes.
pub fn file_url(filename: &str) -> String {
    format!("{API_BASE}/images/file/{filename}")
}

/// URL of the server-generated thumbnail.
pub fn thumbnail_url(filename: &str) -> String {
    format!("{API_BASE}/images/thumbnail/{filename}")
}

/// `Authorization` header value for a session token.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Build the `/images/search` path from whichever filters are set.
///
/// Date inputs arrive as `YYYY-MM-DD` from the date pickers and are widened
/// to UTC-midnight instants, matching what the server parses.
pub fn search_path(keyword: &str, start_date: &str, end_date: &str) -> String {
    let mut query = Vec::new();
    let keyword = keyword.trim();
    if !keyword.is_empty() {
        query.push(format!("keyword={}", encode_component(keyword)));
    }
    if !start_date.is_empty() {
        query.push(format!("startDate={}", encode_component(&date_to_instant(start_date))));
    }
    if !end_date.is_empty() {
        query.push(format!("endDate={}", encode_component(&date_to_instant(end_date))));
    }

    if query.is_empty() {
        "/images/search".to_owned()
    } else {
        format!("/images/search?{}", query.join("&"))
    }
}

/// Widen a `YYYY-MM-DD` date-picker value to a UTC-midnight ISO instant.
pub fn date_to_instant(date: &str) -> String {
    format!("{date}T00:00:00.000Z")
}

/// Query/path components escape everything outside the unreserved set.
const COMPONENT_SET: &percent_encoding::AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a query or path component, leaving unreserved bytes alone.
pub fn encode_component(raw: &str) -> String {
    percent_encoding::utf8_percent_encode(raw, COMPONENT_SET).to_string()
}

/// Best-effort human-readable message for a non-2xx response.
///
/// Prefers the body's `error` field, then `message`, then the bare status.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                if !msg.trim().is_empty() {
                    return msg.to_owned();
                }
            }
        }
    }
    format!("server error: {status}")
}
