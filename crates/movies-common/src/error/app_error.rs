//! Application error types
//!
//! Startup failures and the single mapping from domain errors to HTTP status.

use movies_core::DomainError;
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Domain errors (request level)
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Database bootstrap errors
    #[error("{0}")]
    Database(String),

    // Listener / serve loop errors
    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() {
                    400
                } else {
                    500
                }
            }
            Self::Database(_) | Self::Server(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Database(_) => "DATABASE_ERROR",
            Self::Server(_) => "SERVER_ERROR",
        }
    }
}

/// Error response body: `{ "error": "...", "code": "..." }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use movies_core::MovieId;

    #[test]
    fn test_domain_status_codes() {
        let not_found = AppError::from(DomainError::MovieNotFound(MovieId::new("x")));
        assert_eq!(not_found.status_code(), 404);
        assert_eq!(not_found.error_code(), "UNKNOWN_MOVIE");

        let empty = AppError::from(DomainError::EmptyUpdate);
        assert_eq!(empty.status_code(), 400);
        assert_eq!(empty.error_code(), "EMPTY_UPDATE");

        let invalid = AppError::from(DomainError::ValidationError("title is required".into()));
        assert_eq!(invalid.status_code(), 400);

        let db = AppError::from(DomainError::DatabaseError("boom".to_string()));
        assert_eq!(db.status_code(), 500);
        assert_eq!(db.error_code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_startup_errors() {
        let err = AppError::Database("failed to create movies table: denied".to_string());
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "failed to create movies table: denied");

        let err = AppError::Server("Failed to bind to 0.0.0.0:3000".to_string());
        assert_eq!(err.error_code(), "SERVER_ERROR");
    }

    #[test]
    fn test_domain_message_passes_through() {
        let err = AppError::from(DomainError::DatabaseError("Connection refused".to_string()));
        assert_eq!(err.to_string(), "Connection refused");

        let response = ErrorResponse {
            error: err.to_string(),
            code: err.error_code().to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "Connection refused");
        assert_eq!(json["code"], "DATABASE_ERROR");
    }
}
