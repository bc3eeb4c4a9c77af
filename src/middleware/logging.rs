//! Logging middleware
//!
//! Logs every HTTP request with its method, path, status and latency.

use std::time::Instant;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};
use crate::utils::helpers::elapsed_ms;

/// Requests slower than this are logged as warnings
pub const SLOW_REQUEST_MS: u64 = 1000;

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = elapsed_ms(start);
    let status = response.status();
    if status.is_server_error() {
        error!(method = %method, path = %path, status = status.as_u16(), duration_ms = duration_ms, "Request failed");
    } else if duration_ms > SLOW_REQUEST_MS {
        warn!(method = %method, path = %path, status = status.as_u16(), duration_ms = duration_ms, "Slow request");
    } else {
        info!(method = %method, path = %path, status = status.as_u16(), duration_ms = duration_ms, "Request handled");
    }

    response
}
