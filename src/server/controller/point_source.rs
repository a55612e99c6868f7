use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::points::UpsertPointSourceDto,
    server::{
        error::AppError,
        model::points::{PointSource, UpsertPointSourceParams},
        service::point_source::PointSourceService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// GET /guilds/{guild_id}/points - List the guild's point sources
pub async fn list_point_sources(
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
) -> Result<impl IntoResponse, AppError> {
    let sources = PointSourceService::new(&state.db).list(guild_id).await?;

    let sources_dto: Vec<_> = sources.into_iter().map(PointSource::into_dto).collect();

    Ok((StatusCode::OK, Json(sources_dto)))
}

/// PUT /guilds/{guild_id}/points/{source} - Create or replace a point source
///
/// # Returns
/// - `200 OK`: PointSourceDto
/// - `404 Not Found`: Guild does not exist
/// - `422 Unprocessable Entity`: Malformed name or negative value
pub async fn upsert_point_source(
    State(state): State<AppState>,
    ApiPath((guild_id, source)): ApiPath<(u64, String)>,
    ApiJson(payload): ApiJson<UpsertPointSourceDto>,
) -> Result<impl IntoResponse, AppError> {
    let source = PointSourceService::new(&state.db)
        .upsert(UpsertPointSourceParams {
            guild_id,
            source,
            points: payload.points,
        })
        .await?;

    Ok((StatusCode::OK, Json(source.into_dto())))
}

/// DELETE /guilds/{guild_id}/points/{source}
pub async fn delete_point_source(
    State(state): State<AppState>,
    ApiPath((guild_id, source)): ApiPath<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    PointSourceService::new(&state.db)
        .delete(guild_id, &source)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
