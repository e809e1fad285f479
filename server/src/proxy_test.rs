use super::*;

#[test]
fn target_url_joins_path_and_query() {
    let base = "http://127.0.0.1:8000/api";
    assert_eq!(target_url(base, "doctors/", None), "http://127.0.0.1:8000/api/doctors/");
    assert_eq!(target_url(base, "/doctors/5/", Some("")), "http://127.0.0.1:8000/api/doctors/5/");
    assert_eq!(
        target_url(base, "doctors/5/available_slots/", Some("date=2026-03-02")),
        "http://127.0.0.1:8000/api/doctors/5/available_slots/?date=2026-03-02"
    );
}

#[test]
fn backend_path_keeps_escapes() {
    assert_eq!(backend_path("/api/doctors/"), "/doctors/");
    assert_eq!(backend_path("/api/doctors/a%3Fb/"), "/doctors/a%3Fb/");
    assert_eq!(backend_path("/api/files/x%2Fy%23z"), "/files/x%2Fy%23z");
}

#[test]
fn errors_map_to_gateway_statuses() {
    let response = ProxyError::Unreachable("connection refused".to_owned()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Timeout.into_response().status(), StatusCode::GATEWAY_TIMEOUT);
}
