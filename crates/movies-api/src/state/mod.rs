//! Application state
//!
//! Holds the shared state for the Axum application.

use std::sync::Arc;

use movies_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Service context containing the movie repository
    service_context: Arc<ServiceContext>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext) -> Self {
        Self {
            service_context: Arc::new(service_context),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }
}
