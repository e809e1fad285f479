use super::*;

const SAMPLE_PATHS: &[&str] = &[
    "/",
    "/about",
    "/doctors",
    "/departments",
    "/contact",
    "/login",
    "/register",
    "/admin-login",
    "/booking/4",
    "/my-bookings",
    "/dashboard",
    "/admin",
    "/admin/dashboard",
    "/admin/doctors",
    "/admin/departments",
    "/admin/bookings",
    "/admin/leaves",
    "/admin/users",
    "/admin/contacts",
    "/admin/unknown",
    "/nowhere",
];

fn identity(is_superuser: bool, is_staff: bool) -> Identity {
    Identity {
        id: 1,
        username: "user".to_owned(),
        email: None,
        first_name: None,
        last_name: None,
        is_superuser,
        is_staff,
        role: None,
    }
}

fn admin() -> Session {
    Session::signed_in(identity(true, false))
}

fn doctor() -> Session {
    Session::signed_in(identity(false, true))
}

fn patient() -> Session {
    Session::signed_in(identity(false, false))
}

fn all_sessions() -> Vec<Session> {
    vec![Session::signed_out(), admin(), doctor(), patient()]
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn scenario_a_signed_out_patient_page_remembers_path() {
    let decision = evaluate(&Session::signed_out(), "/my-bookings");
    assert_eq!(decision, Decision::RedirectToLogin { return_to: Some("/my-bookings".to_owned()) });
    assert_eq!(decision.redirect_target().as_deref(), Some("/login?next=/my-bookings"));
}

#[test]
fn scenario_b_superuser_on_home_goes_to_admin() {
    assert_eq!(evaluate(&admin(), "/"), Decision::RedirectToAdminHome);
}

#[test]
fn scenario_c_doctor_on_admin_page_goes_to_patient_home() {
    assert_eq!(evaluate(&doctor(), "/admin/dashboard"), Decision::RedirectToPatientHome);
}

#[test]
fn scenario_d_doctor_on_doctor_dashboard_renders() {
    assert_eq!(evaluate(&doctor(), "/dashboard"), Decision::Render);
}

#[test]
fn scenario_e_loading_never_redirects() {
    let session = Session::new();
    assert_eq!(evaluate(&session, "/admin/dashboard"), Decision::ShowLoading);
}

// =============================================================
// Properties
// =============================================================

#[test]
fn loading_always_shows_loading() {
    for base in all_sessions() {
        let session = Session { loading: true, ..base };
        for path in SAMPLE_PATHS {
            assert_eq!(evaluate(&session, path), Decision::ShowLoading, "{path}");
        }
    }
}

#[test]
fn signed_out_on_role_pages_goes_to_login() {
    let session = Session::signed_out();
    for path in SAMPLE_PATHS {
        let class = route::classify(path);
        if matches!(class, RouteClass::PatientOnly | RouteClass::DoctorOnly | RouteClass::AdminOnly) {
            assert!(
                matches!(evaluate(&session, path), Decision::RedirectToLogin { .. }),
                "{path}"
            );
        }
    }
}

#[test]
fn signed_out_renders_public_and_auth_pages() {
    let session = Session::signed_out();
    for path in ["/", "/doctors", "/login", "/register", "/admin-login"] {
        assert_eq!(evaluate(&session, path), Decision::Render, "{path}");
    }
}

#[test]
fn superuser_confined_to_admin_area() {
    let session = admin();
    for path in ["/", "/about", "/doctors", "/contact", "/my-bookings", "/booking/9", "/dashboard"] {
        assert_eq!(evaluate(&session, path), Decision::RedirectToAdminHome, "{path}");
    }
    assert_eq!(evaluate(&session, "/admin/users"), Decision::Render);
}

#[test]
fn superuser_flag_beats_staff_flag() {
    let session = Session::signed_in(identity(true, true));
    assert_eq!(evaluate(&session, "/my-bookings"), Decision::RedirectToAdminHome);
    assert_eq!(evaluate(&session, "/admin/doctors"), Decision::Render);
}

#[test]
fn doctor_on_patient_pages_goes_to_doctor_home() {
    let session = doctor();
    assert_eq!(evaluate(&session, "/my-bookings"), Decision::RedirectToDoctorHome);
    assert_eq!(evaluate(&session, "/booking/3"), Decision::RedirectToDoctorHome);
}

#[test]
fn doctor_may_browse_public_pages() {
    assert_eq!(evaluate(&doctor(), "/doctors"), Decision::Render);
}

#[test]
fn patient_denied_doctor_and_admin_pages() {
    let session = patient();
    assert_eq!(evaluate(&session, "/dashboard"), Decision::RedirectToPatientHome);
    assert_eq!(evaluate(&session, "/admin/bookings"), Decision::RedirectToPatientHome);
    assert_eq!(evaluate(&session, "/my-bookings"), Decision::Render);
}

#[test]
fn signed_in_users_bounced_from_auth_pages() {
    assert_eq!(evaluate(&admin(), "/login"), Decision::RedirectToAdminHome);
    assert_eq!(evaluate(&doctor(), "/register"), Decision::RedirectToDoctorHome);
    assert_eq!(evaluate(&patient(), "/admin-login"), Decision::RedirectToPatientHome);
}

#[test]
fn unclassified_paths_fail_closed() {
    assert_eq!(
        evaluate(&Session::signed_out(), "/nowhere"),
        Decision::RedirectToLogin { return_to: None }
    );
    assert_eq!(evaluate(&patient(), "/nowhere"), Decision::RedirectToPatientHome);
    assert_eq!(evaluate(&doctor(), "/nowhere"), Decision::RedirectToDoctorHome);
    assert_eq!(evaluate(&admin(), "/admin/unknown"), Decision::RedirectToAdminHome);
}

#[test]
fn only_patient_pages_are_remembered() {
    let session = Session::signed_out();
    assert_eq!(
        evaluate(&session, "/dashboard"),
        Decision::RedirectToLogin { return_to: None }
    );
    assert_eq!(
        evaluate(&session, "/admin/users"),
        Decision::RedirectToLogin { return_to: None }
    );
    assert_eq!(
        evaluate(&session, "/booking/5"),
        Decision::RedirectToLogin { return_to: Some("/booking/5".to_owned()) }
    );
}

#[test]
fn evaluation_is_idempotent() {
    for session in all_sessions() {
        for path in SAMPLE_PATHS {
            assert_eq!(evaluate(&session, path), evaluate(&session, path), "{path}");
        }
    }
}

#[test]
fn redirect_targets_never_redirect_again() {
    for session in all_sessions() {
        for path in SAMPLE_PATHS {
            let decision = evaluate(&session, path);
            let Some(target) = decision.redirect_target() else {
                continue;
            };
            assert_eq!(
                evaluate(&session, &target),
                Decision::Render,
                "{path} -> {target} for {:?}",
                session.role()
            );
        }
    }
}

// =============================================================
// Post-login target
// =============================================================

#[test]
fn post_login_admin_and_doctor_ignore_return_path() {
    assert_eq!(post_login_target(&identity(true, false), Some("/my-bookings")), "/admin/dashboard");
    assert_eq!(post_login_target(&identity(false, true), Some("/my-bookings")), "/dashboard");
}

#[test]
fn post_login_patient_resumes_patient_or_public_page() {
    let user = identity(false, false);
    assert_eq!(post_login_target(&user, Some("/my-bookings")), "/my-bookings");
    assert_eq!(post_login_target(&user, Some("/booking/2")), "/booking/2");
    assert_eq!(post_login_target(&user, Some("/doctors?department=1")), "/doctors?department=1");
}

#[test]
fn post_login_patient_rejects_unsafe_return_paths() {
    let user = identity(false, false);
    for path in ["/", "/login", "/register", "/admin/dashboard", "/dashboard", "//evil.example", "https://x.y", "/nowhere"] {
        assert_eq!(post_login_target(&user, Some(path)), "/", "{path}");
    }
    assert_eq!(post_login_target(&user, None), "/");
}

// =============================================================
// Redirect resolution
// =============================================================

#[test]
fn redirect_for_matches_decision_outside_auth_pages() {
    for session in all_sessions() {
        for path in SAMPLE_PATHS.iter().filter(|p| route::classify(p) != RouteClass::AuthOnly) {
            assert_eq!(redirect_for(&session, path), evaluate(&session, path).redirect_target(), "{path}");
        }
    }
}

#[test]
fn fresh_patient_login_resumes_next_param() {
    let login_page = route::login_href(Some("/booking/4"));
    assert_eq!(redirect_for(&patient(), &login_page).as_deref(), Some("/booking/4"));
    assert_eq!(redirect_for(&doctor(), &login_page).as_deref(), Some("/dashboard"));
    assert_eq!(redirect_for(&Session::signed_out(), &login_page), None);
    assert_eq!(redirect_for(&Session::new(), &login_page), None);
}

#[test]
fn fresh_login_targets_render() {
    for session in all_sessions() {
        for next in SAMPLE_PATHS {
            let page = route::login_href(Some(next));
            if let Some(target) = redirect_for(&session, &page) {
                assert_eq!(evaluate(&session, &target), Decision::Render, "{page} -> {target}");
            }
        }
    }
}
