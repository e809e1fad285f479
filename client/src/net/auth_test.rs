use super::*;

#[test]
fn rejected_login_is_an_auth_error_with_fallback_text() {
    let err = decode_login::<TokenPair>(401, "", LOGIN_FAILED).expect_err("rejected");
    assert_eq!(err, ApiError::Auth(LOGIN_FAILED.to_owned()));
}

#[test]
fn rejected_login_keeps_server_detail() {
    let body = r#"{"detail": "No active account found with the given credentials"}"#;
    let err = decode_login::<TokenPair>(401, body, LOGIN_FAILED).expect_err("rejected");
    assert_eq!(err.to_string(), "No active account found with the given credentials");
}

#[test]
fn accepted_login_yields_token_pair() {
    let pair: TokenPair = decode_login(200, r#"{"access": "a1", "refresh": "r1"}"#, LOGIN_FAILED).expect("pair");
    assert_eq!(pair, TokenPair { access: "a1".to_owned(), refresh: "r1".to_owned() });
}

#[test]
fn federated_login_may_carry_user() {
    let body = r#"{"access": "a", "refresh": "r", "user": {"id": 3, "username": "gina"}}"#;
    let login: FederatedLogin = decode_login(200, body, FEDERATED_LOGIN_FAILED).expect("login");
    assert_eq!(login.user.map(|u| u.username), Some("gina".to_owned()));

    let err = decode_login::<FederatedLogin>(400, "{}", FEDERATED_LOGIN_FAILED).expect_err("rejected");
    assert_eq!(err.to_string(), FEDERATED_LOGIN_FAILED);
}

#[test]
fn registration_uses_server_message_or_default() {
    assert_eq!(registration_message(201, r#"{"message": "Welcome!"}"#).expect("ok"), "Welcome!");
    assert_eq!(registration_message(201, r#"{"username": "amy"}"#).expect("ok"), REGISTERED);

    let err = registration_message(400, r#"{"username": ["A user with that username already exists."]}"#)
        .expect_err("taken");
    assert_eq!(err.fields().and_then(|f| f.first("username")), Some("A user with that username already exists."));
}
