//! Tests for slot_allowed.

use super::*;

/// Expect sidebar slots hidden below lg with the shipped policy
#[test]
fn sidebar_hidden_below_lg() {
    let config = AdConfig::default();

    assert!(!slot_allowed(&config, AdVariant::Sidebar, 1199));
    assert!(slot_allowed(&config, AdVariant::Sidebar, 1200));
}

/// Expect banners shown at every width with the shipped policy
#[test]
fn banners_always_shown() {
    let config = AdConfig::default();

    assert!(slot_allowed(&config, AdVariant::Banner, 320));
    assert!(slot_allowed(&config, AdVariant::Footer, 320));
}

/// Expect a banner breakpoint to hide narrow banners
#[test]
fn banner_breakpoint_applies() {
    let mut config = AdConfig::default();
    config.display.banner_hide_below = Some(Breakpoint::Sm);

    assert!(!slot_allowed(&config, AdVariant::Banner, 599));
    assert!(slot_allowed(&config, AdVariant::Banner, 600));
}

/// Expect every slot hidden on mobile when mobile_hide is set
#[test]
fn mobile_hide_hides_everything_on_mobile() {
    let mut config = AdConfig::default();
    config.display.mobile_hide = true;

    assert!(!slot_allowed(&config, AdVariant::Banner, 600));
    assert!(!slot_allowed(&config, AdVariant::Popup, 600));
    assert!(slot_allowed(&config, AdVariant::Banner, 900));
}

/// Expect nothing when ads are globally disabled
#[test]
fn disabled_hides_everything() {
    let config = AdConfig {
        enabled: false,
        ..AdConfig::default()
    };

    assert!(!slot_allowed(&config, AdVariant::Banner, 1600));
}
