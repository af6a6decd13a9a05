//! Database models
//!
//! Row types mirroring the MySQL tables, decoded with SQLx `FromRow`.

mod movie;

pub use movie::MovieModel;
