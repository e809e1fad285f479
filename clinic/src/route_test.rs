use super::*;

#[test]
fn public_pages() {
    for path in ["/", "/about", "/doctors", "/departments", "/contact", ""] {
        assert_eq!(classify(path), RouteClass::Public, "{path}");
    }
}

#[test]
fn auth_pages() {
    for path in ["/login", "/register", "/admin-login"] {
        assert_eq!(classify(path), RouteClass::AuthOnly, "{path}");
    }
}

#[test]
fn patient_pages() {
    assert_eq!(classify("/my-bookings"), RouteClass::PatientOnly);
    assert_eq!(classify("/booking/12"), RouteClass::PatientOnly);
    assert_eq!(classify("/booking"), RouteClass::Unclassified);
    assert_eq!(classify("/booking/12/extra"), RouteClass::Unclassified);
}

#[test]
fn doctor_and_admin_pages() {
    assert_eq!(classify("/dashboard"), RouteClass::DoctorOnly);
    assert_eq!(classify("/admin"), RouteClass::AdminOnly);
    for section in ["dashboard", "doctors", "departments", "bookings", "leaves", "users", "contacts"] {
        assert_eq!(classify(&format!("/admin/{section}")), RouteClass::AdminOnly, "{section}");
    }
    assert_eq!(classify("/admin/settings"), RouteClass::Unclassified);
}

#[test]
fn ignores_query_fragment_and_trailing_slash() {
    assert_eq!(classify("/my-bookings/"), RouteClass::PatientOnly);
    assert_eq!(classify("/doctors?department=2"), RouteClass::Public);
    assert_eq!(classify("/admin/users#top"), RouteClass::AdminOnly);
}

#[test]
fn unknown_paths_are_unclassified() {
    assert_eq!(classify("/nowhere"), RouteClass::Unclassified);
    assert!(RouteClass::Unclassified.requires_identity());
    assert!(!RouteClass::Public.requires_identity());
    assert!(!RouteClass::AuthOnly.requires_identity());
}

#[test]
fn admin_area_excludes_admin_login() {
    assert!(is_admin_area("/admin"));
    assert!(is_admin_area("/admin/doctors"));
    assert!(is_admin_area("/admin/unknown?x=1"));
    assert!(!is_admin_area("/admin-login"));
    assert!(!is_admin_area("/administrator"));
    assert!(!is_admin_area("/"));
}

#[test]
fn login_href_encodes_return_path() {
    assert_eq!(login_href(None), "/login");
    assert_eq!(login_href(Some("/my-bookings")), "/login?next=/my-bookings");
    assert_eq!(login_href(Some("/doctors?q=a b")), "/login?next=/doctors%3Fq%3Da%20b");
}

#[test]
fn local_path_check_rejects_protocol_relative() {
    assert!(is_local_path("/booking/3"));
    assert!(!is_local_path("//evil.example"));
    assert!(!is_local_path("https://evil.example"));
    assert!(!is_local_path("/\\evil.example"));
}

#[test]
fn next_param_decodes_return_path() {
    let href = login_href(Some("/booking/4?date=2026-03-02"));
    assert_eq!(next_param(&href).as_deref(), Some("/booking/4?date=2026-03-02"));
    assert_eq!(next_param("/login?foo=1&next=%2Fmy-bookings"), Some("/my-bookings".to_owned()));
    assert_eq!(next_param("/login"), None);
    assert_eq!(next_param("/login?next="), None);
}

#[test]
fn decode_keeps_malformed_escapes() {
    assert_eq!(decode_query_value("a%2"), "a%2");
    assert_eq!(decode_query_value("100%zz"), "100%zz");
    assert_eq!(decode_query_value("/my-bookings%-1"), "/my-bookings%-1");
    // Only the `%` is literal; the `+` still reads as a space.
    assert_eq!(decode_query_value("/my-bookings%+1"), "/my-bookings% 1");
    assert_eq!(decode_query_value("heart+surgeon"), "heart surgeon");
}
