//! Database connection pool management

mod mysql;

pub use mysql::{connect_options, create_pool, DatabaseConfig};

// Re-export MySqlPool for convenience
pub use sqlx::mysql::MySqlPool;
