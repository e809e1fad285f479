use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.backend_timeout, Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS));
    assert_eq!(cfg.backend_connect_timeout, Duration::from_secs(DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS));
}

#[test]
fn overrides_are_parsed_and_url_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://clinic.example/api/"),
        ("BACKEND_TIMEOUT_SECS", "12"),
        ("BACKEND_CONNECT_TIMEOUT_SECS", " 2 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://clinic.example/api");
    assert_eq!(cfg.backend_timeout, Duration::from_secs(12));
    assert_eq!(cfg.backend_connect_timeout, Duration::from_secs(2));
}

#[test]
fn blank_backend_url_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "  ")])).unwrap();
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn malformed_numbers_are_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });

    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(err.to_string().starts_with("invalid BACKEND_TIMEOUT_SECS"));
}
