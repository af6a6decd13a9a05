//! MySQL connection pool management

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::time::Duration;

/// Database configuration for connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Schema the pool connects to (and the bootstrapper creates)
    pub database: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Maximum time to wait for a free connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: String::from("localhost"),
            port: 3306,
            user: String::from("root"),
            password: String::new(),
            database: String::from("movies"),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
        }
    }
}

impl From<&movies_common::DatabaseConfig> for DatabaseConfig {
    fn from(config: &movies_common::DatabaseConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            user: config.user.clone(),
            password: config.password.clone(),
            database: config.name.clone(),
            max_connections: config.max_connections,
            ..Default::default()
        }
    }
}

/// Connection options for the server, without selecting a database
pub fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
}

/// Create a new MySQL connection pool bound to `config.database`
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .connect_with(connect_options(config).database(&config.database))
        .await
}
