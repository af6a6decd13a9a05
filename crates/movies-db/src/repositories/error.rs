//! Error handling utilities for repositories

use movies_core::error::DomainError;
use movies_core::value_objects::MovieId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError, keeping the driver's message
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "movie not found" error
pub fn movie_not_found(id: &MovieId) -> DomainError {
    DomainError::MovieNotFound(id.clone())
}
