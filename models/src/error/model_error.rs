use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised by request builders when the caller supplied an incomplete or
/// malformed request.
#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}
