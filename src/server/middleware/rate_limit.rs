//! Per-peer rate limiting.
//!
//! The limiter itself is `tower_governor`, keyed by peer address. This module holds the
//! pieces around it.

use axum::{http::StatusCode, response::Response};

use crate::server::error::{error_response, ErrorKind};

/// Replenish interval that allows `per_second` sustained requests.
pub fn replenish_interval_ms(per_second: u64) -> u64 {
    (1000 / per_second.max(1)).max(1)
}

/// Replaces the governor's plain-text 429 with the standard error body.
pub async fn rate_limited_body(response: Response) -> Response {
    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        tracing::debug!("Rate limited request");
        return error_response(ErrorKind::RateLimited, "too many requests");
    }

    response
}
