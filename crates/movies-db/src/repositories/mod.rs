//! Repository implementations
//!
//! Implementations of the `MovieRepository` port defined in movies-core.

mod error;
mod memory;
mod movie;

pub use memory::InMemoryMovieRepository;
pub use movie::MySqlMovieRepository;
