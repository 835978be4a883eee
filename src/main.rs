//! N8N User Manager — invites users into an n8n instance behind a shared
//! access code.
//!
//! Main entry point: loads configuration, initializes logging and starts
//! the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use invite_core::config::{AppConfig, LoggingConfig};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    tracing::info!("Starting N8N User Manager v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = invite_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.is_json() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
