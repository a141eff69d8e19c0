mod delete_confirmed;
mod toggle_and_refresh;

use chrono::NaiveDate;

use super::*;

use crate::{
    client::util::test::{fixtures::mock_advertisement, signed_in, test_setup, FakeBackend},
    model::advertisement::{AdType, Position, TargetAudience},
};

fn refreshed_list(refreshed: Refreshed) -> Vec<AdvertisementDto> {
    match refreshed {
        Refreshed::Done(ads) => ads,
        Refreshed::Stale(e) => panic!("list was not refreshed: {}", e),
    }
}

fn payload(title: &str) -> AdvertisementPayload {
    AdvertisementPayload {
        title: title.to_string(),
        description: None,
        image_url: None,
        link_url: Some("https://example.com/fair".to_string()),
        ad_type: AdType::Banner,
        target_audience: TargetAudience::Parents,
        position: Position::ContentTop,
        priority: 2,
        start_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 10, 31),
        is_active: true,
    }
}
