//! # movies-core
//!
//! Domain layer containing the movie entity, value objects, and the repository port.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{round_rating, Movie, MoviePatch};
pub use error::DomainError;
pub use traits::{MovieRepository, RepoResult};
pub use value_objects::{MovieId, Patch};
