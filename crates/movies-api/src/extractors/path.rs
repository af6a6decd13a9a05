//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// The `:id` segment of a movie route
///
/// Not syntax-checked: an id that matches no row is a 404 downstream.
/// Rejections (e.g. invalid UTF-8 after percent-decoding) become 400
/// `{error, code}` bodies.
#[derive(Debug, Clone)]
pub struct MovieIdPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for MovieIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(MovieIdPath(id))
    }
}
