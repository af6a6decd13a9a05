//! Value objects - immutable types that represent domain concepts

mod movie_id;
mod patch;

pub use movie_id::MovieId;
pub use patch::Patch;
