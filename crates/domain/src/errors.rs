//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Text buffer is empty or contains only whitespace
    #[error("Text is empty: enter some text before requesting speech")]
    EmptyText,

    /// Speech rate outside the supported bounds
    #[error("Invalid speech rate: {0}")]
    InvalidRate(String),

    /// Unknown sample preset name
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}
