use thiserror::Error;

/// Reasons an advertisement form cannot be turned into a payload
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Priority must be a whole number, got {0:?}")]
    InvalidPriority(String),
    #[error("Invalid {field} date: {value:?}")]
    InvalidDate { field: &'static str, value: String },
    #[error("End date must not be before the start date")]
    EndBeforeStart,
}
