//! # invite-api
//!
//! HTTP API layer built on Axum.
//!
//! Serves the static sign-up page, the `POST /api/add-user` invitation
//! endpoint and `GET /health`, and maps workflow failures onto the JSON
//! error envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
