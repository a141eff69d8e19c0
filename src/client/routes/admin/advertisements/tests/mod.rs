
use chrono::NaiveDate;

use super::*;

use crate::client::{
    error::ClientError, service::Refreshed, util::test::fixtures::mock_advertisement,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 19).unwrap()
}
