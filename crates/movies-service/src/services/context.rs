//! Service context - dependency container for services
//!
//! Holds the repository (and through it, the connection pool) that every
//! request handler works against. Passed explicitly; there is no global pool.

use std::sync::Arc;

use movies_core::traits::MovieRepository;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    movie_repo: Arc<dyn MovieRepository>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }

    /// Get the movie repository
    pub fn movie_repo(&self) -> &dyn MovieRepository {
        self.movie_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("movie_repo", &"dyn MovieRepository")
            .finish()
    }
}
