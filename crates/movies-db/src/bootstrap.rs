//! Schema bootstrap
//!
//! Runs once before the listener starts: creates the database if the
//! account is allowed to, then creates the `movies` table. Both statements
//! are `IF NOT EXISTS`, so restarting against an existing schema is a no-op.

use sqlx::mysql::MySqlConnection;
use sqlx::{Connection, MySqlPool};
use tracing::{info, warn};

use crate::pool::{connect_options, create_pool, DatabaseConfig};

/// DDL for the only table the service owns
pub const CREATE_MOVIES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS movies (
        id CHAR(36) PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        genre VARCHAR(100),
        year INT,
        rating DECIMAL(3,1)
    )
";

/// Fatal bootstrap failures
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("failed to open connection pool: {0}")]
    Pool(#[source] sqlx::Error),

    #[error("failed to create movies table: {0}")]
    Schema(#[source] sqlx::Error),
}

/// `CREATE DATABASE` for an identifier that cannot be bound as a parameter
pub fn create_database_sql(name: &str) -> String {
    format!("CREATE DATABASE IF NOT EXISTS {}", quote_identifier(name))
}

/// Backtick-quote a MySQL identifier, doubling embedded backticks
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Create the configured database through a database-less connection
pub async fn ensure_database(config: &DatabaseConfig) -> Result<(), sqlx::Error> {
    let mut conn = MySqlConnection::connect_with(&connect_options(config)).await?;
    sqlx::raw_sql(&create_database_sql(&config.database))
        .execute(&mut conn)
        .await?;
    conn.close().await
}

/// Create the movies table if it is missing
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CREATE_MOVIES_TABLE).execute(pool).await?;
    Ok(())
}

/// Full startup sequence: database (best effort), pool, table (fatal)
pub async fn bootstrap(config: &DatabaseConfig) -> Result<MySqlPool, BootstrapError> {
    if let Err(e) = ensure_database(config).await {
        warn!(
            database = %config.database,
            error = %e,
            "Could not create database (insufficient privileges?), assuming it exists"
        );
    }

    let pool = create_pool(config).await.map_err(BootstrapError::Pool)?;
    ensure_schema(&pool).await.map_err(BootstrapError::Schema)?;

    info!(database = %config.database, "Database and movies table ready");
    Ok(pool)
}
