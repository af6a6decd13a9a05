//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::{health, movies};
use crate::state::AppState;

/// Create the main router: health checks plus the movie resource
pub fn create_router() -> Router<AppState> {
    Router::new().merge(health_routes()).merge(movie_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Movie CRUD routes
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        .route(
            "/movies/:id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
}
