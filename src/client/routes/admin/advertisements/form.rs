use chrono::NaiveDate;

use crate::{
    client::error::FormError,
    model::advertisement::{
        parse_calendar_date, AdType, AdvertisementDto, AdvertisementPayload, Position,
        TargetAudience,
    },
};

/// Editable state of the create/edit dialog, kept as the raw input values
#[derive(Debug, Clone, PartialEq)]
pub struct AdvertisementForm {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link_url: String,
    pub ad_type: AdType,
    pub target_audience: TargetAudience,
    pub position: Position,
    pub priority: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub start_date: String,
    /// `YYYY-MM-DD`, or empty for no expiry
    pub end_date: String,
    pub is_active: bool,
}

impl AdvertisementForm {
    /// Blank form for a new advertisement starting `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            link_url: String::new(),
            ad_type: AdType::Banner,
            target_audience: TargetAudience::All,
            position: Position::SidebarRight,
            priority: "1".to_string(),
            start_date: format_date(today),
            end_date: String::new(),
            is_active: true,
        }
    }

    pub fn from_advertisement(ad: &AdvertisementDto) -> Self {
        Self {
            title: ad.title.clone(),
            description: ad.description.clone().unwrap_or_default(),
            image_url: ad.image_url.clone().unwrap_or_default(),
            link_url: ad.link_url.clone().unwrap_or_default(),
            ad_type: ad.ad_type,
            target_audience: ad.target_audience,
            position: ad.position,
            priority: ad.priority.to_string(),
            start_date: format_date(ad.start_date),
            end_date: ad.end_date.map(format_date).unwrap_or_default(),
            is_active: ad.is_active,
        }
    }

    /// Validates the inputs and builds the request body
    pub fn to_payload(&self) -> Result<AdvertisementPayload, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }

        let priority = self
            .priority
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidPriority(self.priority.clone()))?;

        let start_date = parse_date("start", &self.start_date)?;
        let end_date = match self.end_date.trim() {
            "" => None,
            value => Some(parse_date("end", value)?),
        };

        if end_date.is_some_and(|end| end < start_date) {
            return Err(FormError::EndBeforeStart);
        }

        Ok(AdvertisementPayload {
            title: title.to_string(),
            description: non_blank(&self.description),
            image_url: non_blank(&self.image_url),
            link_url: non_blank(&self.link_url),
            ad_type: self.ad_type,
            target_audience: self.target_audience,
            position: self.position,
            priority,
            start_date,
            end_date,
            is_active: self.is_active,
        })
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    parse_calendar_date(value).map_err(|_| FormError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
