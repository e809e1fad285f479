use super::*;
use clinic::FieldErrors;

#[test]
fn field_message_reads_validation_errors() {
    let err = ApiError::Validation(FieldErrors::new().with("username", "A user with that username already exists."));
    assert_eq!(field_message(Some(&err), "username").as_deref(), Some("A user with that username already exists."));
    assert_eq!(field_message(Some(&err), "email"), None);
}

#[test]
fn field_message_ignores_other_errors() {
    assert_eq!(field_message(Some(&ApiError::Network("down".to_owned())), "username"), None);
    assert_eq!(field_message(None, "username"), None);
}

#[test]
fn local_mismatch_is_reported_on_password() {
    let form = Registration {
        username: "amy".to_owned(),
        password: "longenough".to_owned(),
        password2: "different1".to_owned(),
        ..Registration::default()
    };
    let err = form.validate().expect_err("mismatch");
    assert_eq!(field_message(Some(&err), "password").as_deref(), Some("Passwords don't match."));
}

#[test]
fn success_lands_on_login_with_notice() {
    assert_eq!(clinic::route::classify(AFTER_REGISTER), clinic::RouteClass::AuthOnly);
}
