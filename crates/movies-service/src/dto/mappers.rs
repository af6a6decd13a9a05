//! Entity to DTO mappers

use movies_core::Movie;

use super::responses::MovieResponse;

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            year: movie.year,
            rating: movie.rating,
        }
    }
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.into_inner(),
            title: movie.title,
            genre: movie.genre,
            year: movie.year,
            rating: movie.rating,
        }
    }
}
