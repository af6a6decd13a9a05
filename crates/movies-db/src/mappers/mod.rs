//! Entity to model mappers
//!
//! Conversions between the domain `Movie` and the `movies` table:
//! - `From<MovieModel> for Movie`: convert database rows to domain objects
//! - `MovieInsert` / `MovieUpdate`: parameterized statements built from domain data

mod movie;

pub use movie::{Assignment, ColumnValue, MovieInsert, MovieUpdate};
