//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid city identifier
    #[error("Invalid city id: {0}")]
    InvalidCityId(String),

    /// Invalid ISO country code
    #[error("Invalid country code: {0}")]
    InvalidCountryCode(String),

    /// Coordinates outside the valid range
    #[error("Invalid coordinates: longitude must be -180 to 180, latitude must be -90 to 90")]
    InvalidCoordinates,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
