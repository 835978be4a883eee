//! Server bootstrap: wires the n8n client, workflow and router together
//! and serves until a shutdown signal arrives.

use std::sync::Arc;

use tokio::net::TcpListener;

use invite_core::config::AppConfig;
use invite_core::error::{AppError, ErrorKind};
use invite_core::result::AppResult;
use invite_n8n::N8nClient;

use crate::router::build_router;
use crate::state::AppState;

/// Build the shared state backed by a real n8n client.
pub fn build_state(config: AppConfig) -> AppResult<AppState> {
    let http = reqwest::Client::builder().build().map_err(|e| {
        AppError::with_source(
            ErrorKind::Internal,
            format!("Failed to build HTTP client: {e}"),
            e,
        )
    })?;
    let directory = Arc::new(N8nClient::new(http, &config.n8n));

    Ok(AppState::new(config, directory))
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    let addr = config.server.bind_address();
    let n8n_url = config.n8n.url.clone();

    let state = build_state(config)?;
    let app = build_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}: {e}"), e)
        })?;

    tracing::info!("N8N User Manager listening on {}", addr);
    tracing::info!("N8N Instance: {}", n8n_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, format!("Server error: {e}"), e))?;

    tracing::info!("N8N User Manager shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
