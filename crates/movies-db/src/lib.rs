//! # movies-db
//!
//! Database layer implementing the movie repository with MySQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - Connection pool management (fixed capacity, auto-commit per query)
//! - Idempotent schema bootstrap (database and `movies` table)
//! - The `movies` row model with a SQLx `FromRow` derive
//! - Entity ↔ row mappers, including partial-update SQL assembly
//! - The MySQL repository plus an in-memory one for tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use movies_db::{bootstrap, DatabaseConfig, MySqlMovieRepository};
//!
//! async fn example(config: DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = bootstrap(&config).await?;
//!     let movie_repo = MySqlMovieRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use bootstrap::{bootstrap, ensure_database, ensure_schema, BootstrapError};
pub use pool::{connect_options, create_pool, DatabaseConfig, MySqlPool};
pub use repositories::{InMemoryMovieRepository, MySqlMovieRepository};
