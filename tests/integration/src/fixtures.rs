//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create movie request
#[derive(Debug, Default, Serialize)]
pub struct CreateMovie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl CreateMovie {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// A title no other test run will collide with
    pub fn unique() -> Self {
        Self::titled(format!("Test Movie {} {}", std::process::id(), unique_suffix()))
    }
}

/// Movie as returned by the API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}
