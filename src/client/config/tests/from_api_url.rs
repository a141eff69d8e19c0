//! Tests for ClientConfig::from_api_url.

use super::*;

/// Expect a trailing slash to be trimmed
#[test]
fn trims_trailing_slash() {
    let config = ClientConfig::from_api_url("https://campus.example.com/api/").unwrap();
    assert_eq!(config.api_url, "https://campus.example.com/api");
}

/// Expect same-origin paths to be accepted
#[test]
fn accepts_relative_path() {
    let config = ClientConfig::from_api_url("/api").unwrap();
    assert_eq!(config.api_url, "/api");
}

/// Expect URLs without a scheme to be rejected
#[test]
fn rejects_missing_scheme() {
    let result = ClientConfig::from_api_url("campus.example.com/api");

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
