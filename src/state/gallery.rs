#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::types::ImageRecord;

/// Gallery state: the fetched image list, the transient selection set, and
/// the carousel over it.
///
/// Load, search, and reset all hit the network and can land out of order.
/// Each request takes a generation number from `begin_request`; a response
/// whose generation is no longer current is dropped instead of overwriting
/// newer data.
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub images: Vec<ImageRecord>,
    pub loading: bool,
    pub error: Option<String>,
    /// Selected image ids in click order; drives the carousel. Never
    /// persisted.
    pub selection: Vec<i64>,
    pub carousel: Option<CarouselState>,
    pub request_seq: u64,
}

/// Position within the carousel over the current selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
}

impl GalleryState {
    /// Start a new list/search request and return its generation.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Apply a finished request. Returns `false` (and changes nothing) when
    /// the generation is stale.
    pub fn apply_response(&mut self, seq: u64, result: Result<Vec<ImageRecord>, String>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(images) => {
                self.images = images;
                self.selection.retain(|id| self.images.iter().any(|img| img.id == *id));
            }
            Err(message) => {
                self.images.clear();
                self.error = Some(message);
            }
        }
        true
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selection.contains(&id)
    }

    pub fn toggle_selection(&mut self, id: i64) {
        if let Some(pos) = self.selection.iter().position(|s| *s == id) {
            self.selection.remove(pos);
        } else {
            self.selection.push(id);
        }
    }

    /// Open the carousel at the first selected image. Returns `false` when
    /// nothing is selected.
    pub fn start_carousel(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.carousel = Some(CarouselState::default());
        true
    }

    pub fn close_carousel(&mut self) {
        self.carousel = None;
    }

    /// Advance the carousel, wrapping past the last selected image.
    pub fn carousel_next(&mut self) {
        let len = self.selection.len();
        if let Some(carousel) = &mut self.carousel {
            if len > 0 {
                carousel.index = (carousel.index + 1) % len;
            }
        }
    }

    /// Step the carousel back, wrapping before the first selected image.
    pub fn carousel_prev(&mut self) {
        let len = self.selection.len();
        if let Some(carousel) = &mut self.carousel {
            if len > 0 {
                carousel.index = (carousel.index + len - 1) % len;
            }
        }
    }

    /// The image the carousel currently points at, if any.
    pub fn carousel_image(&self) -> Option<&ImageRecord> {
        let carousel = self.carousel.as_ref()?;
        let id = *self.selection.get(carousel.index)?;
        self.images.iter().find(|img| img.id == id)
    }
}
