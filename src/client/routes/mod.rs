pub mod admin;
pub mod home;
pub mod not_found;

pub use admin::AdminAdvertisements;
pub use home::Home;
pub use not_found::NotFound;
