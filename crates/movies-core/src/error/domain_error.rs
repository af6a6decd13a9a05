//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::MovieId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Movie not found: {0}")]
    MovieNotFound(MovieId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("no fields to update")]
    EmptyUpdate,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("{0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MovieNotFound(_) => "UNKNOWN_MOVIE",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyUpdate => "EMPTY_UPDATE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MovieNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::EmptyUpdate)
    }
}
