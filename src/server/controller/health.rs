use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

/// GET /health - Liveness probe
///
/// Does not touch the database and requires no token.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    )
}
