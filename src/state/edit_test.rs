use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn edit_state_defaults_to_neutral_adjustments() {
    let state = EditState::default();
    assert!(state.loading);
    assert!(!state.processing);
    assert_eq!(state.brightness, 1.0);
    assert_eq!(state.contrast, 100);
    assert!(state.crop.is_empty());
}

// =============================================================
// Clamping
// =============================================================

#[test]
fn brightness_is_clamped_to_slider_range() {
    let mut state = EditState::default();
    state.set_brightness(0.1);
    assert_eq!(state.brightness, BRIGHTNESS_MIN);
    state.set_brightness(9.9);
    assert_eq!(state.brightness, BRIGHTNESS_MAX);
    state.set_brightness(1.3);
    assert_eq!(state.brightness, 1.3);
}

#[test]
fn contrast_is_clamped_to_slider_range() {
    let mut state = EditState::default();
    state.set_contrast(0);
    assert_eq!(state.contrast, CONTRAST_MIN);
    state.set_contrast(400);
    assert_eq!(state.contrast, CONTRAST_MAX);
    state.set_contrast(125);
    assert_eq!(state.contrast, 125);
}

// =============================================================
// Crop rounding
// =============================================================

#[test]
fn crop_rounds_to_nearest_integer() {
    let rect = CropRect { x: 10.4, y: 20.5, width: 299.6, height: 400.49 };
    assert_eq!(rect.rounded(), CropRequest { x: 10, y: 21, width: 300, height: 400 });
}

#[test]
fn integer_crop_passes_through_unchanged() {
    let rect = CropRect { x: 0.0, y: 0.0, width: 640.0, height: 480.0 };
    assert_eq!(rect.rounded(), CropRequest { x: 0, y: 0, width: 640, height: 480 });
}

#[test]
fn negative_halves_round_toward_positive_infinity() {
    let rect = CropRect { x: -0.5, y: -1.5, width: 2.5, height: 0.5 };
    assert_eq!(rect.rounded(), CropRequest { x: 0, y: -1, width: 3, height: 1 });
}

#[test]
fn crop_without_area_is_empty() {
    assert!(CropRect::default().is_empty());
    assert!(CropRect { x: 1.0, y: 1.0, width: 0.0, height: 10.0 }.is_empty());
    assert!(!CropRect { x: 1.0, y: 1.0, width: 0.6, height: 10.0 }.is_empty());
}
