pub mod advertisement;
pub mod container;

pub use advertisement::{AdVariant, Advertisement};
pub use container::AdContainer;
