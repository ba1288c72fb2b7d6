#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Upload size ceiling, matching the server's multipart limit.
pub const MAX_UPLOAD_BYTES: f64 = 50.0 * 1024.0 * 1024.0;

/// Pre-submission rejection reasons, each with its own user-facing message.
///
/// These checks are advisory only; the server revalidates everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("please choose an image file (JPG, PNG, GIF, ...)")]
    NotAnImage,
    #[error("file size must not exceed 50 MB")]
    TooLarge,
    #[error("the filename must include an extension")]
    MissingExtension,
    #[error("please choose an image to upload")]
    NoFile,
}

/// A chosen file's metadata, captured from the browser `File` object so the
/// validation below stays free of browser types.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    /// Size in bytes; `f64` because that is what the DOM reports.
    pub size: f64,
    /// Object URL for the local preview, when one could be created.
    pub preview_url: Option<String>,
}

/// Replace the current selection, handing back the previous preview URL so
/// the caller can revoke the object URL behind it.
pub fn swap_selection(
    slot: &mut Option<SelectedFile>,
    next: Option<SelectedFile>,
) -> Option<String> {
    let previous = slot.take().and_then(|meta| meta.preview_url);
    *slot = next;
    previous
}

impl SelectedFile {
    /// Shallow checks run before any network call: MIME prefix, size
    /// ceiling, and filename extension, in that order.
    ///
    /// # Errors
    ///
    /// Returns the first failed [`UploadError`] check.
    pub fn validate(&self) -> Result<(), UploadError> {
        if !self.mime.starts_with("image/") {
            return Err(UploadError::NotAnImage);
        }
        if self.size > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge);
        }
        if self.name.is_empty() || !self.name.contains('.') {
            return Err(UploadError::MissingExtension);
        }
        Ok(())
    }
}
