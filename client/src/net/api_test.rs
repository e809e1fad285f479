use super::*;

#[test]
fn endpoint_prefixes_api_base() {
    assert_eq!(endpoint("/auth/profile/"), "/api/auth/profile/");
}

#[test]
fn detail_and_action_paths_keep_trailing_slash() {
    assert_eq!(detail_path("departments", 4), "/departments/4/");
    assert_eq!(action_path("bookings", 9, "update_status"), "/bookings/9/update_status/");
    assert_eq!(action_path("contacts", 2, "mark_read"), "/contacts/2/mark_read/");
}

#[test]
fn doctors_query_path_combines_filters() {
    assert_eq!(doctors_query_path(None, None), "/doctors/");
    assert_eq!(doctors_query_path(Some("   "), None), "/doctors/");
    assert_eq!(doctors_query_path(Some("heart surgeon"), None), "/doctors/?search=heart%20surgeon");
    assert_eq!(doctors_query_path(Some("ent"), Some(3)), "/doctors/?search=ent&dep_name=3");
    assert_eq!(doctors_query_path(None, Some(3)), "/doctors/?dep_name=3");
}

#[test]
fn available_slots_path_includes_date() {
    assert_eq!(available_slots_path(5, "2026-03-02"), "/doctors/5/available_slots/?date=2026-03-02");
}

#[test]
fn bookings_query_path_filters_by_status() {
    assert_eq!(bookings_query_path(None), "/bookings/");
    assert_eq!(bookings_query_path(Some(BookingStatus::Pending)), "/bookings/?status=pending");
}

#[test]
fn decode_parses_success_bodies() {
    let parsed: Ack = decode(201, r#"{"message": "ok"}"#).expect("ack");
    assert_eq!(parsed.message.as_deref(), Some("ok"));

    let empty: serde_json::Value = decode(204, "").expect("no content");
    assert!(empty.is_null());
}

#[test]
fn decode_maps_failures_to_api_errors() {
    let err = decode::<Ack>(401, r#"{"detail": "token expired"}"#).expect_err("expired");
    assert!(err.is_session_expired());

    let err = decode::<Ack>(400, r#"{"email": ["Enter a valid email address."]}"#).expect_err("invalid");
    assert_eq!(err.to_string(), "Enter a valid email address.");

    let err = decode::<Ack>(200, "not json").expect_err("malformed");
    assert!(matches!(err, ApiError::Status { status: 200, .. }));
}

#[tokio::test]
async fn requests_fail_without_browser() {
    let err = list_departments().await.expect_err("no browser");
    assert_eq!(err, ApiError::Network("not available on server".to_owned()));
}
