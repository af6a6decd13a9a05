//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Movie as returned by every movie endpoint; absent optionals are `null`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieResponse {
    pub id: String,
    pub title: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response: `{ "ok": true }`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { ok: true }
    }
}

/// Readiness response with the database round-trip result
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub ok: bool,
    pub database: String,
    pub timestamp: DateTime<Utc>,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            ok: database_healthy,
            database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            timestamp: Utc::now(),
        }
    }
}
