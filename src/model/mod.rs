pub mod advertisement;
pub mod api;
