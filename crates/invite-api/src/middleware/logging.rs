//! Access logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Level, event};

/// Logs method, path, status and latency of every request. Server errors
/// are logged at `ERROR`, client errors at `WARN`, everything else at
/// `INFO`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = started.elapsed().as_millis() as u64;

    macro_rules! access_log {
        ($level:expr) => {
            event!($level, %method, %path, status, latency_ms, "HTTP request")
        };
    }

    if response.status().is_server_error() {
        access_log!(Level::ERROR);
    } else if response.status().is_client_error() {
        access_log!(Level::WARN);
    } else {
        access_log!(Level::INFO);
    }

    response
}
