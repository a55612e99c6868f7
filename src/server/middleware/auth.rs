//! Bearer token authentication.
//!
//! Every `/guilds` route requires `Authorization: Bearer <token>` where the token equals
//! the configured `API_TOKEN`. There is one token and it grants full access.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{error::AppError, state::AppState};

const BEARER_PREFIX: &str = "Bearer ";

/// Rejects requests that do not carry the configured bearer token.
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(request.headers()) else {
        tracing::debug!(path = %request.uri().path(), "Request without bearer token");
        return Err(AppError::Unauthorized("missing bearer token".to_string()));
    };

    if !token_matches(token, &state.api_token) {
        tracing::warn!(path = %request.uri().path(), "Request with invalid bearer token");
        return Err(AppError::Unauthorized("invalid bearer token".to_string()));
    }

    Ok(next.run(request).await)
}

/// Extracts the token from an `Authorization: Bearer` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Compares without returning early on the first differing byte.
fn token_matches(given: &str, expected: &str) -> bool {
    given.len() == expected.len()
        && given
            .bytes()
            .zip(expected.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
