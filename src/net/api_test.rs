use super::*;

// =============================================================
// URL construction
// =============================================================

#[test]
fn api_url_prefixes_base_path() {
    assert_eq!(api_url("/images"), "/api/images");
    assert_eq!(api_url("/auth/login"), "/api/auth/login");
}

#[test]
fn file_and_thumbnail_urls_use_server_filename() {
    assert_eq!(file_url("a1b2.jpg"), "/api/images/file/a1b2.jpg");
    assert_eq!(thumbnail_url("a1b2.jpg"), "/api/images/thumbnail/a1b2.jpg");
}

#[test]
fn bearer_header_wraps_token() {
    assert_eq!(bearer_header("tok-123"), "Bearer tok-123");
}

// =============================================================
// Search path
// =============================================================

#[test]
fn search_path_empty_filters_has_no_query() {
    assert_eq!(search_path("", "", ""), "/images/search");
    assert_eq!(search_path("   ", "", ""), "/images/search");
}

#[test]
fn search_path_includes_only_set_filters() {
    assert_eq!(search_path("sunset", "", ""), "/images/search?keyword=sunset");
    assert_eq!(
        search_path("", "2024-06-01", ""),
        "/images/search?startDate=2024-06-01T00%3A00%3A00.000Z"
    );
}

#[test]
fn search_path_combines_all_filters_in_order() {
    let path = search_path("beach day", "2024-06-01", "2024-06-30");
    assert_eq!(
        path,
        "/images/search?keyword=beach%20day\
         &startDate=2024-06-01T00%3A00%3A00.000Z\
         &endDate=2024-06-30T00%3A00%3A00.000Z"
    );
}

#[test]
fn date_to_instant_widens_to_utc_midnight() {
    assert_eq!(date_to_instant("2024-01-15"), "2024-01-15T00:00:00.000Z");
}

// =============================================================
// Percent-encoding
// =============================================================

#[test]
fn encode_component_leaves_unreserved_bytes() {
    assert_eq!(encode_component("photo-1_v2.jpg~"), "photo-1_v2.jpg~");
}

#[test]
fn encode_component_escapes_reserved_and_utf8() {
    assert_eq!(encode_component("a b&c"), "a%20b%26c");
    assert_eq!(encode_component("日落"), "%E6%97%A5%E8%90%BD");
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn error_message_prefers_error_then_message_field() {
    assert_eq!(error_message(400, r#"{"error":"bad crop","message":"other"}"#), "bad crop");
    assert_eq!(error_message(400, r#"{"message":"field required"}"#), "field required");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(500, "not json"), "server error: 500");
    assert_eq!(error_message(502, r#"{"error":"   "}"#), "server error: 502");
}

#[test]
fn api_error_display_is_user_facing() {
    assert_eq!(
        ApiError::Timeout.to_string(),
        "request timed out, check your network connection"
    );
    assert_eq!(
        ApiError::Status { status: 413, message: "file too large".to_owned() }.to_string(),
        "file too large"
    );
}
