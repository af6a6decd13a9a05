//! In-memory implementation of MovieRepository
//!
//! Same contract as the MySQL repository, backed by a map. Used to exercise
//! services and handlers without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use movies_core::entities::{Movie, MoviePatch};
use movies_core::error::DomainError;
use movies_core::traits::{MovieRepository, RepoResult};
use movies_core::value_objects::MovieId;

use super::error::movie_not_found;

#[derive(Debug, Default)]
pub struct InMemoryMovieRepository {
    movies: RwLock<HashMap<MovieId, Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored movies
    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }

    async fn find_all(&self) -> RepoResult<Vec<Movie>> {
        let mut movies: Vec<Movie> = self.movies.read().await.values().cloned().collect();
        // MySQL's default collation compares case-insensitively
        movies.sort_by_cached_key(|m| m.title.to_lowercase());
        Ok(movies)
    }

    async fn find_by_id(&self, id: &MovieId) -> RepoResult<Option<Movie>> {
        Ok(self.movies.read().await.get(id).cloned())
    }

    async fn create(&self, movie: &Movie) -> RepoResult<()> {
        let mut movies = self.movies.write().await;
        if movies.contains_key(&movie.id) {
            return Err(DomainError::DatabaseError(format!(
                "Duplicate entry '{}' for key 'movies.PRIMARY'",
                movie.id
            )));
        }
        movies.insert(movie.id.clone(), movie.clone());
        Ok(())
    }

    async fn update(&self, id: &MovieId, patch: &MoviePatch) -> RepoResult<()> {
        if patch.is_empty() {
            return Err(DomainError::EmptyUpdate);
        }
        let mut movies = self.movies.write().await;
        let movie = movies.get_mut(id).ok_or_else(|| movie_not_found(id))?;
        movie.apply(patch)
    }

    async fn delete(&self, id: &MovieId) -> RepoResult<()> {
        self.movies
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| movie_not_found(id))
    }
}
