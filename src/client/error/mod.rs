//! Error types for the campus-ads web client.
//!
//! Requests to the advertisement API fail with [`ClientError`], configuration loading with
//! [`ConfigError`] and admin form validation with [`FormError`]. All are `thiserror` enums so
//! they can be logged through `tracing` or shown to the operator as-is.

pub mod config;
pub mod form;

use thiserror::Error;

pub use config::ConfigError;
pub use form::FormError;

/// Failure of a request against the advertisement API.
///
/// Status codes are mapped onto the categories callers act on: authorization problems
/// (expired or missing token), validation problems (rejected payload), and everything else.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// The API rejected the credentials (401/403).
    #[error("Not authorized: {0}")]
    Unauthorized(String),
    /// The API rejected the submitted data (400/422).
    #[error("Invalid request: {0}")]
    Validation(String),
    /// Any other non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
