//! Route definitions.
//!
//! `GET /` serves `index.html` from the public directory and any other
//! unmatched path falls through to the same directory, so the front-end
//! can ship its own assets.

use std::path::PathBuf;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let public_dir = PathBuf::from(&state.config.frontend.public_dir);

    let api_routes = Router::new().route("/add-user", post(handlers::invitation::add_user));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health))
        .route_service("/", ServeFile::new(public_dir.join("index.html")))
        .fallback_service(ServeDir::new(public_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}
