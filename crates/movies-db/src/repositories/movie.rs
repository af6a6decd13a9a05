//! MySQL implementation of MovieRepository

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

use movies_core::entities::{Movie, MoviePatch};
use movies_core::traits::{MovieRepository, RepoResult};
use movies_core::value_objects::MovieId;

use crate::mappers::{MovieInsert, MovieUpdate};
use crate::models::MovieModel;

use super::error::{map_db_error, movie_not_found};

/// MySQL implementation of MovieRepository
#[derive(Clone)]
pub struct MySqlMovieRepository {
    pool: MySqlPool,
}

impl MySqlMovieRepository {
    /// Create a new MySqlMovieRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: &MovieId) -> RepoResult<bool> {
        let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM movies WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(found.is_some())
    }
}

#[async_trait]
impl MovieRepository for MySqlMovieRepository {
    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Movie>> {
        let results = sqlx::query_as::<_, MovieModel>(
            r"
            SELECT id, title, genre, year, CAST(rating AS DOUBLE) AS rating
            FROM movies
            ORDER BY title
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Movie::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &MovieId) -> RepoResult<Option<Movie>> {
        let result = sqlx::query_as::<_, MovieModel>(
            r"
            SELECT id, title, genre, year, CAST(rating AS DOUBLE) AS rating
            FROM movies
            WHERE id = ?
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Movie::from))
    }

    #[instrument(skip(self, movie), fields(movie_id = %movie.id))]
    async fn create(&self, movie: &Movie) -> RepoResult<()> {
        MovieInsert::new(movie)
            .bind(sqlx::query(MovieInsert::SQL))
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &MovieId, patch: &MoviePatch) -> RepoResult<()> {
        let update = MovieUpdate::new(id, patch)?;
        let sql = update.sql();

        let result = update
            .bind(sqlx::query(&sql))
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        // Without CLIENT_FOUND_ROWS MySQL counts changed rows, so an update
        // that writes identical values reports 0 on an existing row.
        if result.rows_affected() == 0 && !self.exists(id).await? {
            return Err(movie_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &MovieId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(movie_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MySqlMovieRepository>();
    }
}
