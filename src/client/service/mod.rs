//! Client services for the advertisement API.
//!
//! [`advertisement::AdvertisementService`] serves the public side (listing ads for a slot and
//! best-effort view/click telemetry); [`admin::AdvertisementAdmin`] backs the admin console and
//! sequences every mutation with a list refresh.

pub mod admin;
pub mod advertisement;

pub use admin::{AdvertisementAdmin, Refreshed};
pub use advertisement::AdvertisementService;
