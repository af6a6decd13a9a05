//! Domain entities - core business objects

mod movie;

pub use movie::{round_rating, Movie, MoviePatch};
