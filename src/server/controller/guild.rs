use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::guild::{CreateGuildDto, UpdateGuildDto},
    server::{
        error::AppError,
        model::guild::{CreateGuildParams, UpdateGuildParams},
        service::guild::GuildService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// POST /guilds - Register a guild
///
/// # Returns
/// - `201 Created`: GuildDto
/// - `409 Conflict`: Guild already registered
/// - `422 Unprocessable Entity`: Multiplier not greater than 0
pub async fn create_guild(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateGuildDto>,
) -> Result<impl IntoResponse, AppError> {
    let guild = GuildService::new(&state.db)
        .create(CreateGuildParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(guild.into_dto())))
}

/// GET /guilds/{guild_id}
pub async fn get_guild(
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
) -> Result<impl IntoResponse, AppError> {
    let guild = GuildService::new(&state.db).get(guild_id).await?;

    Ok((StatusCode::OK, Json(guild.into_dto())))
}

/// PUT /guilds/{guild_id} - Update multiplier and notification channel
///
/// # Returns
/// - `200 OK`: Updated GuildDto
/// - `404 Not Found`: Guild does not exist
/// - `422 Unprocessable Entity`: Multiplier not greater than 0
pub async fn update_guild(
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
    ApiJson(payload): ApiJson<UpdateGuildDto>,
) -> Result<impl IntoResponse, AppError> {
    let guild = GuildService::new(&state.db)
        .update(UpdateGuildParams::from_dto(guild_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(guild.into_dto())))
}

/// DELETE /guilds/{guild_id} - Delete a guild and everything it owns
pub async fn delete_guild(
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
) -> Result<impl IntoResponse, AppError> {
    GuildService::new(&state.db).delete(guild_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
