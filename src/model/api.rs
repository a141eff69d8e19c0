use serde::{Deserialize, Serialize};

/// The body returned by the advertisement API when a request fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    #[serde(alias = "message")]
    pub error: String,
}
