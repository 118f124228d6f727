//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A required input was missing or empty
    #[error("Validation failed for {field}: {message}")]
    Validation {
        /// The offending request field
        field: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// Upstream weather API failure (non-success status, transport, or parse)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Query against the city store failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create a validation error for a request field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Whether this error is the caller's fault rather than a server fault
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message() {
        let err = ApplicationError::validation("name", "name is required");
        assert_eq!(err.to_string(), "Validation failed for name: name is required");
        assert!(err.is_validation());
    }

    #[test]
    fn external_service_error_message() {
        let err = ApplicationError::ExternalService("HTTP 502".to_string());
        assert_eq!(err.to_string(), "External service error: HTTP 502");
        assert!(!err.is_validation());
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError =
            DomainError::InvalidCityId("abc".to_string()).into();
        assert_eq!(err.to_string(), "Invalid city id: abc");
    }

    #[test]
    fn storage_error_message() {
        let err = ApplicationError::Storage("query failed".to_string());
        assert!(err.to_string().contains("query failed"));
    }
}
