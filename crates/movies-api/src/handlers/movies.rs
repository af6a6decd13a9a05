//! Movie handlers
//!
//! CRUD endpoints over the `movies` table.

use axum::{extract::State, Json};
use movies_service::{CreateMovieRequest, MovieResponse, MovieService, UpdateMovieRequest};

use crate::extractors::{JsonBody, MovieIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a movie
///
/// POST /movies
pub async fn create_movie(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMovieRequest>,
) -> ApiResult<Created<Json<MovieResponse>>> {
    let service = MovieService::new(state.service_context());
    let response = service.create_movie(request).await?;
    Ok(Created(Json(response)))
}

/// List all movies ordered by title
///
/// GET /movies
pub async fn list_movies(State(state): State<AppState>) -> ApiResult<Json<Vec<MovieResponse>>> {
    let service = MovieService::new(state.service_context());
    Ok(Json(service.list_movies().await?))
}

/// Get movie by ID
///
/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    MovieIdPath(id): MovieIdPath,
) -> ApiResult<Json<MovieResponse>> {
    let service = MovieService::new(state.service_context());
    Ok(Json(service.get_movie(&id).await?))
}

/// Partially update a movie
///
/// PUT /movies/{id}
pub async fn update_movie(
    State(state): State<AppState>,
    MovieIdPath(id): MovieIdPath,
    JsonBody(request): JsonBody<UpdateMovieRequest>,
) -> ApiResult<Json<MovieResponse>> {
    let service = MovieService::new(state.service_context());
    Ok(Json(service.update_movie(&id, request).await?))
}

/// Delete a movie
///
/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    MovieIdPath(id): MovieIdPath,
) -> ApiResult<NoContent> {
    let service = MovieService::new(state.service_context());
    service.delete_movie(&id).await?;
    Ok(NoContent)
}
