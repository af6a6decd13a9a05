//! Health check handlers
//!
//! Endpoints for liveness and readiness checks.

use axum::{extract::State, http::StatusCode, Json};
use movies_service::{HealthResponse, MovieService, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness); never touches the database
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with a database round-trip
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let response = MovieService::new(state.service_context()).readiness().await;
    let status = if response.ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
