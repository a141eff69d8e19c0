pub mod session;
pub mod viewport;
