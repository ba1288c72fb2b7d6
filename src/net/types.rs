//! Wire types shared with the PictureX REST API.
//!
//! The server speaks camelCase JSON; every DTO here carries the matching
//! serde rename. Image records are server-owned and read-only to this
//! client — views re-fetch instead of mutating them locally.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Lightweight identity cached alongside the session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: i64,
    pub username: String,
}

/// Successful `POST /auth/login` response.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

/// A tag attached to an image, many-to-many on the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// One image as listed by `GET /images` or fetched by `GET /images/{id}`.
///
/// Dimensions, size, EXIF fields, and the description are nullable on the
/// wire; tags may be absent entirely on list responses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageRecord {
    pub id: i64,
    pub filename: String,
    pub original_filename: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub file_size: Option<i64>,
    pub exif_date: Option<String>,
    pub exif_location: Option<String>,
    pub exif_camera: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<Tag>,
}

impl ImageRecord {
    /// File size formatted in megabytes for the metadata panel.
    #[allow(clippy::cast_precision_loss)]
    pub fn file_size_mb(&self) -> Option<String> {
        self.file_size
            .map(|bytes| format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0))
    }
}

/// Integer crop rectangle submitted to `POST /images/{id}/crop`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRequest {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}
