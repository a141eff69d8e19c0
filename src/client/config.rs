//! Ad display policy and client configuration.
//!
//! [`AdConfig`] is built once when the app starts and handed to the component tree through a
//! context provider; nothing mutates it afterwards. Lookups fail closed: a position without a
//! configured limit shows no ads.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    client::error::ConfigError,
    model::advertisement::{AdType, Position},
};

/// Base URL used when `CAMPUS_ADS_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Responsive breakpoints, in CSS pixels, matching the theme's media queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub fn min_width(&self) -> u32 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 600,
            Breakpoint::Md => 900,
            Breakpoint::Lg => 1200,
            Breakpoint::Xl => 1536,
        }
    }

    /// True when a viewport of `width` pixels is narrower than this breakpoint
    pub fn is_below(&self, width: u32) -> bool {
        width < self.min_width()
    }
}

/// Coarse viewport size used for slot selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Narrower than `md`
    Mobile,
    /// From `md` up to, but excluding, `lg`
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: u32) -> Self {
        if Breakpoint::Md.is_below(width) {
            ViewportClass::Mobile
        } else if Breakpoint::Lg.is_below(width) {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Pixel heights for the xs, sm and md-and-up breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ResponsiveHeight {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
}

impl ResponsiveHeight {
    pub const fn new(xs: u32, sm: u32, md: u32) -> Self {
        Self { xs, sm, md }
    }

    pub fn for_viewport(&self, viewport: ViewportClass) -> u32 {
        match viewport {
            ViewportClass::Mobile => self.xs,
            ViewportClass::Tablet => self.sm,
            ViewportClass::Desktop => self.md,
        }
    }
}

/// Size constraints for one ad type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SizeLimit {
    pub max_height: ResponsiveHeight,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub max_width: Option<String>,
}

/// Breakpoints below which ads are hidden
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayBreakpoints {
    /// Hide every ad on mobile viewports
    pub mobile_hide: bool,
    pub sidebar_hide_below: Option<Breakpoint>,
    /// `None` shows banners at every width
    pub banner_hide_below: Option<Breakpoint>,
}

impl Default for DisplayBreakpoints {
    fn default() -> Self {
        Self {
            mobile_hide: false,
            sidebar_hide_below: Some(Breakpoint::Lg),
            banner_hide_below: None,
        }
    }
}

/// Read-only ad display policy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdConfig {
    pub enabled: bool,
    pub max_ads_per_position: BTreeMap<Position, usize>,
    pub display: DisplayBreakpoints,
    pub size_limits: BTreeMap<AdType, SizeLimit>,
    /// Ads with a lower priority are never shown
    pub min_priority: i32,
}

impl Default for AdConfig {
    fn default() -> Self {
        let max_ads_per_position = BTreeMap::from([
            (Position::Header, 1),
            (Position::ContentTop, 0),
            (Position::SidebarLeft, 1),
            (Position::SidebarRight, 1),
            (Position::ContentBottom, 0),
            (Position::Footer, 0),
        ]);

        let size_limits = BTreeMap::from([
            (
                AdType::Banner,
                SizeLimit {
                    max_height: ResponsiveHeight::new(100, 120, 150),
                    aspect_ratio: Some("16/9".to_string()),
                    max_width: None,
                },
            ),
            (
                AdType::Sidebar,
                SizeLimit {
                    max_height: ResponsiveHeight::new(150, 180, 200),
                    aspect_ratio: None,
                    max_width: Some("100%".to_string()),
                },
            ),
        ]);

        Self {
            enabled: true,
            max_ads_per_position,
            display: DisplayBreakpoints::default(),
            size_limits,
            min_priority: 1,
        }
    }
}

impl AdConfig {
    /// Reads the policy document in `CAMPUS_ADS_CONFIG` as captured at build time
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_override(option_env!("CAMPUS_ADS_CONFIG"))
    }

    /// Defaults when `document` is absent or blank, otherwise the parsed document
    pub fn from_override(document: Option<&str>) -> Result<Self, ConfigError> {
        match document.map(str::trim) {
            Some(json) if !json.is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }

    /// Loads a policy document; fields it leaves out keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Maximum ads shown at `position`, zero when the position is not configured
    pub fn max_ads(&self, position: Position) -> usize {
        if !self.enabled {
            return 0;
        }

        self.max_ads_per_position
            .get(&position)
            .copied()
            .unwrap_or(0)
    }

    pub fn size_limit(&self, ad_type: AdType) -> Option<&SizeLimit> {
        self.size_limits.get(&ad_type)
    }

    pub fn meets_min_priority(&self, priority: i32) -> bool {
        priority >= self.min_priority
    }
}

/// Where the client finds the advertisement API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    /// Reads `CAMPUS_ADS_API_URL` as captured at build time
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_api_url(option_env!("CAMPUS_ADS_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn from_api_url(api_url: &str) -> Result<Self, ConfigError> {
        let api_url = api_url.trim();

        let valid_scheme = api_url.starts_with("http://")
            || api_url.starts_with("https://")
            || api_url.starts_with('/');
        if !valid_scheme {
            return Err(ConfigError::InvalidValue {
                var: "CAMPUS_ADS_API_URL".to_string(),
                reason: format!(
                    "expected an http(s) URL or an absolute path, got {:?}",
                    api_url
                ),
            });
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[cfg(test)]
mod tests;
