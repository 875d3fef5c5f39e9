//! Error Types

use thiserror::Error;

/// Result type alias for lead-form operations
pub type Result<T> = std::result::Result<T, LeadError>;

/// Lead-form error types
#[derive(Error, Debug)]
pub enum LeadError {
    /// Payload could not be serialized to `application/x-www-form-urlencoded`
    #[error("Payload encoding error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}
