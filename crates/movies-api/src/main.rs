//! Movies API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p movies-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use movies_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before anything touches the network
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if let Err(e) = try_init_tracing() {
                eprintln!("Warning: Failed to initialize tracing: {e}");
            }
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        database = %config.database.name,
        "Configuration loaded"
    );

    // Run the server
    if let Err(e) = movies_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
