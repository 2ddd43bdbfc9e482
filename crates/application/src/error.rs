//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Speech synthesis failed
    #[error("Synthesis error: {0}")]
    Synthesis(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Requested entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err = ApplicationError::from(DomainError::EmptyText);
        assert_eq!(err.to_string(), DomainError::EmptyText.to_string());
    }

    #[test]
    fn synthesis_error_message() {
        let err = ApplicationError::Synthesis("engine refused".to_string());
        assert_eq!(err.to_string(), "Synthesis error: engine refused");
    }

    #[test]
    fn external_service_error_message() {
        let err = ApplicationError::ExternalService("timeout".to_string());
        assert_eq!(err.to_string(), "External service error: timeout");
    }

    #[test]
    fn not_found_error_message() {
        let err = ApplicationError::NotFound("Session abc".to_string());
        assert_eq!(err.to_string(), "Not found: Session abc");
    }

    #[test]
    fn configuration_error_message() {
        let err = ApplicationError::Configuration("bad endpoint".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad endpoint");
    }

    #[test]
    fn internal_error_message() {
        let err = ApplicationError::Internal("unexpected".to_string());
        assert_eq!(err.to_string(), "Internal error: unexpected");
    }
}
