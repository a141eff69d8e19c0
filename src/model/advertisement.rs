use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Creative format of an advertisement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdType {
    Banner,
    Sidebar,
    Popup,
    Interstitial,
}

/// Audience an advertisement is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetAudience {
    All,
    Students,
    Teachers,
    Parents,
}

/// Named placement region of the page an advertisement is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Header,
    Footer,
    SidebarLeft,
    SidebarRight,
    ContentTop,
    ContentBottom,
}

impl AdType {
    pub const ALL: [AdType; 4] = [
        AdType::Banner,
        AdType::Sidebar,
        AdType::Popup,
        AdType::Interstitial,
    ];

    /// Wire value used in query strings and select inputs
    pub fn as_str(&self) -> &'static str {
        match self {
            AdType::Banner => "banner",
            AdType::Sidebar => "sidebar",
            AdType::Popup => "popup",
            AdType::Interstitial => "interstitial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdType::Banner => "Banner",
            AdType::Sidebar => "Sidebar",
            AdType::Popup => "Popup",
            AdType::Interstitial => "Interstitial",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl TargetAudience {
    pub const ALL: [TargetAudience; 4] = [
        TargetAudience::All,
        TargetAudience::Students,
        TargetAudience::Teachers,
        TargetAudience::Parents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetAudience::All => "all",
            TargetAudience::Students => "students",
            TargetAudience::Teachers => "teachers",
            TargetAudience::Parents => "parents",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TargetAudience::All => "All",
            TargetAudience::Students => "Students",
            TargetAudience::Teachers => "Teachers",
            TargetAudience::Parents => "Parents",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Header,
        Position::Footer,
        Position::SidebarLeft,
        Position::SidebarRight,
        Position::ContentTop,
        Position::ContentBottom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Header => "header",
            Position::Footer => "footer",
            Position::SidebarLeft => "sidebar_left",
            Position::SidebarRight => "sidebar_right",
            Position::ContentTop => "content_top",
            Position::ContentBottom => "content_bottom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Position::Header => "Header",
            Position::Footer => "Footer",
            Position::SidebarLeft => "Sidebar Left",
            Position::SidebarRight => "Sidebar Right",
            Position::ContentTop => "Content Top",
            Position::ContentBottom => "Content Bottom",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for AdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TargetAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An advertisement record as returned by the API.
///
/// `view_count` and `click_count` are owned by the server and only ever grow; the
/// client never sends them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisementDto {
    #[serde(rename = "ad_id")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    pub ad_type: AdType,
    pub target_audience: TargetAudience,
    pub position: Position,
    pub priority: i32,
    #[serde(with = "calendar_date")]
    pub start_date: NaiveDate,
    #[serde(default, with = "calendar_date_option")]
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub click_count: u64,
}

impl AdvertisementDto {
    /// Click-through rate as a percentage, zero when the ad has never been viewed
    pub fn click_through_rate(&self) -> f64 {
        if self.view_count == 0 {
            return 0.0;
        }

        (self.click_count as f64 / self.view_count as f64) * 100.0
    }

    /// Click-through rate formatted with two decimals, e.g. `"12.50"`
    pub fn ctr_display(&self) -> String {
        format!("{:.2}", self.click_through_rate())
    }
}

/// Body sent to create or replace an advertisement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisementPayload {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub ad_type: AdType,
    pub target_audience: TargetAudience,
    pub position: Position,
    pub priority: i32,
    #[serde(with = "calendar_date")]
    pub start_date: NaiveDate,
    #[serde(with = "calendar_date_option")]
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

/// Optional equality filters for the public advertisement listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdFilters {
    pub target_audience: Option<TargetAudience>,
    pub position: Option<Position>,
    pub ad_type: Option<AdType>,
}

impl AdFilters {
    pub fn for_slot(position: Position, ad_type: AdType) -> Self {
        Self {
            target_audience: None,
            position: Some(position),
            ad_type: Some(ad_type),
        }
    }

    /// Query parameters for the filters that are set, in a stable order
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        if let Some(audience) = self.target_audience {
            query.push(("target_audience", audience.as_str().to_string()));
        }
        if let Some(position) = self.position {
            query.push(("position", position.as_str().to_string()));
        }
        if let Some(ad_type) = self.ad_type {
            query.push(("ad_type", ad_type.as_str().to_string()));
        }

        query
    }
}

/// Parses the calendar date portion of either `YYYY-MM-DD` or a full ISO-8601 timestamp
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let date = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
}

mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_calendar_date(&value).map_err(serde::de::Error::custom)
    }
}

mod calendar_date_option {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) if !value.trim().is_empty() => super::parse_calendar_date(&value)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advertisement(view_count: u64, click_count: u64) -> AdvertisementDto {
        AdvertisementDto {
            id: 1,
            title: "Spring book fair".to_string(),
            description: None,
            image_url: None,
            link_url: None,
            ad_type: AdType::Banner,
            target_audience: TargetAudience::All,
            position: Position::ContentTop,
            priority: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: None,
            is_active: true,
            view_count,
            click_count,
        }
    }

    mod click_through_rate {
        use super::*;

        /// Expect "0.00" when the ad has never been viewed
        #[test]
        fn zero_views_is_zero() {
            let ad = advertisement(0, 0);
            assert_eq!(ad.click_through_rate(), 0.0);
            assert_eq!(ad.ctr_display(), "0.00");
        }

        /// Expect "0.00" even when clicks were recorded without views
        #[test]
        fn clicks_without_views_is_zero() {
            let ad = advertisement(0, 4);
            assert_eq!(ad.ctr_display(), "0.00");
        }

        /// Expect the percentage rounded to two decimals
        #[test]
        fn formats_two_decimals() {
            assert_eq!(advertisement(8, 1).ctr_display(), "12.50");
            assert_eq!(advertisement(3, 1).ctr_display(), "33.33");
            assert_eq!(advertisement(10, 10).ctr_display(), "100.00");
        }
    }

    mod deserialize {
        use super::*;

        /// Expect timestamps to be normalized to their calendar date
        #[test]
        fn accepts_iso_timestamps() {
            let json = r#"{
                "ad_id": 7,
                "title": "Tutoring",
                "description": null,
                "ad_type": "sidebar",
                "target_audience": "students",
                "position": "sidebar_right",
                "priority": 3,
                "start_date": "2024-09-01T00:00:00.000Z",
                "end_date": "2024-12-31T23:59:59.000Z",
                "is_active": true,
                "view_count": 40,
                "click_count": 2
            }"#;

            let ad: AdvertisementDto = serde_json::from_str(json).unwrap();
            assert_eq!(ad.id, 7);
            assert_eq!(ad.position, Position::SidebarRight);
            assert_eq!(ad.start_date, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
            assert_eq!(ad.end_date, NaiveDate::from_ymd_opt(2024, 12, 31));
        }

        /// Expect missing counters and a null end date to take defaults
        #[test]
        fn defaults_missing_fields() {
            let json = r#"{
                "ad_id": 2,
                "title": "Open day",
                "ad_type": "banner",
                "target_audience": "parents",
                "position": "footer",
                "priority": 1,
                "start_date": "2024-01-15",
                "end_date": null,
                "is_active": false
            }"#;

            let ad: AdvertisementDto = serde_json::from_str(json).unwrap();
            assert_eq!(ad.end_date, None);
            assert_eq!(ad.view_count, 0);
            assert_eq!(ad.click_count, 0);
        }
    }

    mod to_query {
        use super::*;

        /// Expect no parameters for empty filters
        #[test]
        fn empty_filters_have_no_query() {
            assert!(AdFilters::default().to_query().is_empty());
        }

        /// Expect only the filters that are set to be serialized
        #[test]
        fn only_present_filters() {
            let filters = AdFilters {
                target_audience: Some(TargetAudience::Teachers),
                position: None,
                ad_type: Some(AdType::Popup),
            };

            assert_eq!(
                filters.to_query(),
                vec![
                    ("target_audience", "teachers".to_string()),
                    ("ad_type", "popup".to_string()),
                ]
            );
        }
    }
}
