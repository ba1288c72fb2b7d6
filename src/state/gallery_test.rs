use super::*;

fn image(id: i64) -> ImageRecord {
    ImageRecord {
        id,
        filename: format!("{id}.jpg"),
        original_filename: format!("photo-{id}.jpg"),
        ..ImageRecord::default()
    }
}

// =============================================================
// Request sequencing
// =============================================================

#[test]
fn begin_request_increments_generation_and_sets_loading() {
    let mut state = GalleryState::default();
    let first = state.begin_request();
    let second = state.begin_request();
    assert!(second > first);
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn current_response_is_applied() {
    let mut state = GalleryState::default();
    let seq = state.begin_request();
    assert!(state.apply_response(seq, Ok(vec![image(1), image(2)])));
    assert!(!state.loading);
    assert_eq!(state.images.len(), 2);
}

#[test]
fn stale_response_is_dropped() {
    let mut state = GalleryState::default();
    let stale = state.begin_request();
    let current = state.begin_request();

    // Newer request finishes first.
    assert!(state.apply_response(current, Ok(vec![image(2)])));
    // The race loser arrives afterwards and must not overwrite.
    assert!(!state.apply_response(stale, Ok(vec![image(1)])));

    assert_eq!(state.images.len(), 1);
    assert_eq!(state.images[0].id, 2);
}

#[test]
fn failed_response_clears_images_and_records_error() {
    let mut state = GalleryState::default();
    let seq = state.begin_request();
    state.apply_response(seq, Ok(vec![image(1)]));

    let seq = state.begin_request();
    assert!(state.apply_response(seq, Err("request timed out".to_owned())));
    assert!(state.images.is_empty());
    assert_eq!(state.error.as_deref(), Some("request timed out"));
    assert!(!state.loading);
}

#[test]
fn applying_response_prunes_vanished_selection() {
    let mut state = GalleryState::default();
    let seq = state.begin_request();
    state.apply_response(seq, Ok(vec![image(1), image(2)]));
    state.toggle_selection(1);
    state.toggle_selection(2);

    let seq = state.begin_request();
    state.apply_response(seq, Ok(vec![image(2)]));
    assert_eq!(state.selection, vec![2]);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn toggle_selection_adds_then_removes() {
    let mut state = GalleryState::default();
    state.toggle_selection(5);
    assert!(state.is_selected(5));
    state.toggle_selection(5);
    assert!(!state.is_selected(5));
}

#[test]
fn selection_preserves_click_order() {
    let mut state = GalleryState::default();
    state.toggle_selection(3);
    state.toggle_selection(1);
    state.toggle_selection(2);
    assert_eq!(state.selection, vec![3, 1, 2]);
}

// =============================================================
// Carousel
// =============================================================

#[test]
fn carousel_refuses_empty_selection() {
    let mut state = GalleryState::default();
    assert!(!state.start_carousel());
    assert!(state.carousel.is_none());
}

#[test]
fn carousel_next_and_prev_wrap_around() {
    let mut state = GalleryState::default();
    let seq = state.begin_request();
    state.apply_response(seq, Ok(vec![image(1), image(2), image(3)]));
    state.toggle_selection(1);
    state.toggle_selection(3);

    assert!(state.start_carousel());
    assert_eq!(state.carousel_image().map(|img| img.id), Some(1));

    state.carousel_next();
    assert_eq!(state.carousel_image().map(|img| img.id), Some(3));
    state.carousel_next();
    assert_eq!(state.carousel_image().map(|img| img.id), Some(1));

    state.carousel_prev();
    assert_eq!(state.carousel_image().map(|img| img.id), Some(3));
}

#[test]
fn close_carousel_clears_position_but_keeps_selection() {
    let mut state = GalleryState::default();
    let seq = state.begin_request();
    state.apply_response(seq, Ok(vec![image(1)]));
    state.toggle_selection(1);
    state.start_carousel();
    state.close_carousel();

    assert!(state.carousel.is_none());
    assert_eq!(state.selection, vec![1]);
}
