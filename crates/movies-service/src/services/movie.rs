//! Movie service
//!
//! Create, list, fetch, patch and delete movies, plus the store round-trip
//! used by the readiness check.

use movies_core::entities::{Movie, MoviePatch};
use movies_core::{DomainError, MovieId};
use tracing::{debug, info, instrument, warn};

use crate::dto::{CreateMovieRequest, MovieResponse, ReadinessResponse, UpdateMovieRequest};

use super::context::ServiceContext;
use super::ServiceResult;

/// Movie service
pub struct MovieService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MovieService<'a> {
    /// Create a new MovieService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a movie with a freshly generated id
    #[instrument(skip(self, request))]
    pub async fn create_movie(&self, request: CreateMovieRequest) -> ServiceResult<MovieResponse> {
        let movie = Movie::new(
            request.title.unwrap_or_default(),
            request.genre,
            request.year,
            request.rating,
        )?;

        self.ctx.movie_repo().create(&movie).await?;

        info!(movie_id = %movie.id, "Movie created");

        Ok(MovieResponse::from(movie))
    }

    /// List every movie ordered by title
    #[instrument(skip(self))]
    pub async fn list_movies(&self) -> ServiceResult<Vec<MovieResponse>> {
        let movies = self.ctx.movie_repo().find_all().await?;
        debug!(count = movies.len(), "Listed movies");

        Ok(movies.into_iter().map(MovieResponse::from).collect())
    }

    /// Get a movie by id
    #[instrument(skip(self))]
    pub async fn get_movie(&self, id: &str) -> ServiceResult<MovieResponse> {
        let movie = self.find_movie(&MovieId::new(id)).await?;
        Ok(MovieResponse::from(movie))
    }

    /// Apply a partial update and return the stored result
    ///
    /// The patch is checked before the store is touched, so an empty or
    /// title-clearing request never reaches the database.
    #[instrument(skip(self, request))]
    pub async fn update_movie(
        &self,
        id: &str,
        request: UpdateMovieRequest,
    ) -> ServiceResult<MovieResponse> {
        let id = MovieId::new(id);
        let patch = MoviePatch::from(request);
        patch.validate()?;

        self.ctx.movie_repo().update(&id, &patch).await?;

        info!(movie_id = %id, "Movie updated");

        let movie = self.find_movie(&id).await?;
        Ok(MovieResponse::from(movie))
    }

    /// Hard delete a movie
    #[instrument(skip(self))]
    pub async fn delete_movie(&self, id: &str) -> ServiceResult<()> {
        let id = MovieId::new(id);
        self.ctx.movie_repo().delete(&id).await?;

        info!(movie_id = %id, "Movie deleted");

        Ok(())
    }

    /// Round-trip to the store for the readiness check
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let healthy = match self.ctx.movie_repo().ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Database ping failed");
                false
            }
        };

        ReadinessResponse::ready(healthy)
    }

    async fn find_movie(&self, id: &MovieId) -> ServiceResult<Movie> {
        self.ctx
            .movie_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::MovieNotFound(id.clone()))
    }
}
