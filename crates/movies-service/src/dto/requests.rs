//! Request DTOs for API endpoints

use movies_core::{MoviePatch, Patch};
use serde::Deserialize;
use validator::Validate;

/// Create movie request
///
/// Only `title` is mandatory. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateMovieRequest {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title is required")
    )]
    pub title: Option<String>,

    pub genre: Option<String>,

    pub year: Option<i32>,

    /// One fractional digit is kept
    pub rating: Option<f64>,
}

/// Update movie request
///
/// Each key may be missing (keep), `null` (clear) or a value (set).
/// Validation happens on the resulting `MoviePatch`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovieRequest {
    #[serde(default)]
    pub title: Patch<String>,

    #[serde(default)]
    pub genre: Patch<String>,

    #[serde(default)]
    pub year: Patch<i32>,

    #[serde(default)]
    pub rating: Patch<f64>,
}

impl From<UpdateMovieRequest> for MoviePatch {
    fn from(request: UpdateMovieRequest) -> Self {
        MoviePatch::new(request.title, request.genre, request.year, request.rating)
    }
}
