//! Business logic services
//!
//! Service layer implementations that validate input and orchestrate
//! repository calls.

use movies_core::DomainError;

pub mod context;
pub mod movie;

pub use context::ServiceContext;
pub use movie::MovieService;

/// Result type for service operations
///
/// Services add no failure modes of their own; the domain error is mapped to
/// HTTP by `movies_common::AppError`.
pub type ServiceResult<T> = Result<T, DomainError>;
