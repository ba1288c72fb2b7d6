use super::*;

fn jpeg(name: &str, size: f64) -> SelectedFile {
    SelectedFile { name: name.to_owned(), mime: "image/jpeg".to_owned(), size, preview_url: None }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_image_passes() {
    assert_eq!(jpeg("holiday.jpg", 1024.0).validate(), Ok(()));
}

#[test]
fn non_image_mime_is_rejected_first() {
    let file = SelectedFile {
        name: "notes.pdf".to_owned(),
        mime: "application/pdf".to_owned(),
        size: 10.0,
        preview_url: None,
    };
    assert_eq!(file.validate(), Err(UploadError::NotAnImage));
}

#[test]
fn oversized_file_is_rejected() {
    assert_eq!(jpeg("big.jpg", MAX_UPLOAD_BYTES + 1.0).validate(), Err(UploadError::TooLarge));
    // Exactly at the ceiling is still allowed.
    assert_eq!(jpeg("edge.jpg", MAX_UPLOAD_BYTES).validate(), Ok(()));
}

#[test]
fn filename_without_extension_is_rejected() {
    assert_eq!(jpeg("noextension", 10.0).validate(), Err(UploadError::MissingExtension));
    assert_eq!(jpeg("", 10.0).validate(), Err(UploadError::MissingExtension));
}

// =============================================================
// Selection replacement
// =============================================================

#[test]
fn swap_selection_hands_back_previous_preview_url() {
    let mut slot = Some(SelectedFile {
        preview_url: Some("blob:old".to_owned()),
        ..jpeg("old.jpg", 10.0)
    });

    let stale = swap_selection(&mut slot, Some(jpeg("new.jpg", 20.0)));
    assert_eq!(stale.as_deref(), Some("blob:old"));
    assert_eq!(slot.as_ref().map(|meta| meta.name.as_str()), Some("new.jpg"));
}

#[test]
fn swap_selection_to_none_clears_and_yields_url() {
    let mut slot = Some(SelectedFile {
        preview_url: Some("blob:old".to_owned()),
        ..jpeg("old.jpg", 10.0)
    });

    assert_eq!(swap_selection(&mut slot, None).as_deref(), Some("blob:old"));
    assert!(slot.is_none());

    // No previous selection, nothing to revoke.
    assert!(swap_selection(&mut slot, Some(jpeg("a.jpg", 1.0))).is_none());
}

#[test]
fn each_rejection_has_a_distinct_message() {
    let messages = [
        UploadError::NotAnImage.to_string(),
        UploadError::TooLarge.to_string(),
        UploadError::MissingExtension.to_string(),
        UploadError::NoFile.to_string(),
    ];
    for (i, a) in messages.iter().enumerate() {
        for b in &messages[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
