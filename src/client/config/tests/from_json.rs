//! Tests for AdConfig::from_json.

use super::*;

/// Expect omitted fields to keep their defaults
#[test]
fn partial_document_keeps_defaults() {
    let config = AdConfig::from_json(r#"{ "min_priority": 5 }"#).unwrap();

    assert_eq!(config.min_priority, 5);
    assert!(config.enabled);
    assert_eq!(config.display, DisplayBreakpoints::default());
    assert_eq!(config.max_ads(Position::Header), 1);
}

/// Expect a replaced limit table to drop positions it does not name
#[test]
fn replaced_limits_fail_closed() {
    let config = AdConfig::from_json(
        r#"{
            "max_ads_per_position": { "content_top": 2 },
            "display": { "mobile_hide": true, "banner_hide_below": "sm" }
        }"#,
    )
    .unwrap();

    assert_eq!(config.max_ads(Position::ContentTop), 2);
    assert_eq!(config.max_ads(Position::Header), 0);
    assert!(config.display.mobile_hide);
    assert_eq!(config.display.banner_hide_below, Some(Breakpoint::Sm));
    assert_eq!(config.display.sidebar_hide_below, Some(Breakpoint::Lg));
}

/// Expect malformed documents to be rejected
#[test]
fn rejects_malformed_document() {
    let result = AdConfig::from_json(r#"{ "enabled": "yes" }"#);

    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}
