#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use crate::net::types::{CropRequest, ImageRecord};

/// Brightness factor bounds enforced by the slider.
pub const BRIGHTNESS_MIN: f64 = 0.5;
pub const BRIGHTNESS_MAX: f64 = 2.0;

/// Contrast percentage bounds enforced by the slider.
pub const CONTRAST_MIN: i32 = 50;
pub const CONTRAST_MAX: i32 = 150;

/// State of the edit view: the loaded image and the pending adjustments.
///
/// Crop, brightness, and contrast are each submitted independently; the
/// server creates a new image per operation and this state is discarded
/// when the view navigates away.
#[derive(Clone, Debug, PartialEq)]
pub struct EditState {
    pub image: Option<ImageRecord>,
    pub loading: bool,
    pub processing: bool,
    pub crop: CropRect,
    pub brightness: f64,
    pub contrast: i32,
}

impl Default for EditState {
    fn default() -> Self {
        Self {
            image: None,
            loading: true,
            processing: false,
            crop: CropRect::default(),
            brightness: 1.0,
            contrast: 100,
        }
    }
}

impl EditState {
    /// Clamp and store a slider value for brightness.
    pub fn set_brightness(&mut self, value: f64) {
        self.brightness = value.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX);
    }

    /// Clamp and store a slider value for contrast.
    pub fn set_contrast(&mut self, value: i32) {
        self.contrast = value.clamp(CONTRAST_MIN, CONTRAST_MAX);
    }
}

/// Crop rectangle as entered, in fractional pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    /// A rectangle without area cannot be submitted.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Round every coordinate to the nearest integer for submission.
    pub fn rounded(&self) -> CropRequest {
        CropRequest {
            x: round_half_up(self.x),
            y: round_half_up(self.y),
            width: round_half_up(self.width),
            height: round_half_up(self.height),
        }
    }
}

/// Nearest integer with halves toward positive infinity, matching the
/// browser's `Math.round`.
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
