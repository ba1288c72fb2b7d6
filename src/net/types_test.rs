use super::*;

// =============================================================
// ImageRecord
// =============================================================

#[test]
fn image_record_deserializes_camel_case() {
    let json = serde_json::json!({
        "id": 7,
        "filename": "a1b2.jpg",
        "originalFilename": "holiday.jpg",
        "width": 4000,
        "height": 3000,
        "fileSize": 2_097_152,
        "exifDate": "2024-06-01T12:00:00",
        "exifLocation": "48.85, 2.35",
        "exifCamera": "X100V",
        "description": "Seine at dusk",
        "tags": [{"id": 1, "name": "travel"}]
    });

    let record: ImageRecord = serde_json::from_value(json).expect("image record");
    assert_eq!(record.id, 7);
    assert_eq!(record.original_filename, "holiday.jpg");
    assert_eq!(record.file_size, Some(2_097_152));
    assert_eq!(record.exif_camera.as_deref(), Some("X100V"));
    assert_eq!(record.tags, vec![Tag { id: 1, name: "travel".to_owned() }]);
}

#[test]
fn image_record_tolerates_missing_optional_fields() {
    let json = serde_json::json!({
        "id": 1,
        "filename": "x.png",
        "originalFilename": "x.png"
    });

    let record: ImageRecord = serde_json::from_value(json).expect("sparse record");
    assert!(record.width.is_none());
    assert!(record.exif_date.is_none());
    assert!(record.description.is_none());
    assert!(record.tags.is_empty());
}

#[test]
fn file_size_mb_formats_two_decimals() {
    let record = ImageRecord { file_size: Some(3 * 1024 * 1024 / 2), ..ImageRecord::default() };
    assert_eq!(record.file_size_mb().as_deref(), Some("1.50 MB"));

    let record = ImageRecord::default();
    assert!(record.file_size_mb().is_none());
}

// =============================================================
// Auth DTOs
// =============================================================

#[test]
fn login_response_deserializes_camel_case() {
    let json = serde_json::json!({
        "token": "jwt-abc",
        "userId": 42,
        "username": "photographer1"
    });

    let resp: LoginResponse = serde_json::from_value(json).expect("login response");
    assert_eq!(resp.token, "jwt-abc");
    assert_eq!(resp.user_id, 42);
    assert_eq!(resp.username, "photographer1");
}

#[test]
fn session_user_round_trips_as_camel_case() {
    let user = SessionUser { user_id: 9, username: "alice1".to_owned() };
    let json = serde_json::to_value(&user).expect("serialize");
    assert_eq!(json, serde_json::json!({"userId": 9, "username": "alice1"}));

    let back: SessionUser = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, user);
}

// =============================================================
// CropRequest
// =============================================================

#[test]
fn crop_request_serializes_plain_integer_fields() {
    let req = CropRequest { x: 10, y: 20, width: 300, height: 400 };
    let json = serde_json::to_value(req).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({"x": 10, "y": 20, "width": 300, "height": 400})
    );
}
