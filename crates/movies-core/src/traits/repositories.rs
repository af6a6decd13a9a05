//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Handlers only ever see `dyn MovieRepository`,
//! so tests can swap the MySQL adapter for an in-memory one.

use async_trait::async_trait;

use crate::entities::{Movie, MoviePatch};
use crate::error::DomainError;
use crate::value_objects::MovieId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Round-trip to the store without touching any record
    async fn ping(&self) -> RepoResult<()>;

    /// List every movie, ordered by title ascending
    async fn find_all(&self) -> RepoResult<Vec<Movie>>;

    /// Find movie by ID
    async fn find_by_id(&self, id: &MovieId) -> RepoResult<Option<Movie>>;

    /// Insert a new movie
    async fn create(&self, movie: &Movie) -> RepoResult<()>;

    /// Write the supplied fields of `patch`
    ///
    /// Fails with `MovieNotFound` when no row has `id` and with
    /// `EmptyUpdate` when the patch carries no field.
    async fn update(&self, id: &MovieId, patch: &MoviePatch) -> RepoResult<()>;

    /// Hard delete; fails with `MovieNotFound` when no row has `id`
    async fn delete(&self, id: &MovieId) -> RepoResult<()>;
}
