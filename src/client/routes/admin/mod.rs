pub mod advertisements;

pub use advertisements::AdminAdvertisements;
