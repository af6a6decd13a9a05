//! Movie database model

use sqlx::FromRow;

/// Database model for movies table
///
/// `rating` is `DECIMAL(3,1)` in the table; queries select it as
/// `CAST(rating AS DOUBLE)` so it decodes straight into `f64`.
#[derive(Debug, Clone, FromRow)]
pub struct MovieModel {
    pub id: String,
    pub title: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}
