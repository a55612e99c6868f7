use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::rsn::CreateRsnDto,
    server::{
        error::AppError,
        model::rsn::{AddRsnParams, Rsn},
        service::rsn::RsnService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// GET /guilds/{guild_id}/users/{user_id}/rsn - List a user's aliases
pub async fn list_rsns(
    State(state): State<AppState>,
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
) -> Result<impl IntoResponse, AppError> {
    let rsns = RsnService::new(&state.db).list(guild_id, user_id).await?;

    let rsns_dto: Vec<_> = rsns.into_iter().map(Rsn::into_dto).collect();

    Ok((StatusCode::OK, Json(rsns_dto)))
}

/// POST /guilds/{guild_id}/users/{user_id}/rsn - Register an alias
///
/// # Returns
/// - `201 Created`: RsnDto
/// - `404 Not Found`: User not registered
/// - `409 Conflict`: Alias or Wise Old Man id already taken in the guild
/// - `422 Unprocessable Entity`: Malformed alias
pub async fn add_rsn(
    State(state): State<AppState>,
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
    ApiJson(payload): ApiJson<CreateRsnDto>,
) -> Result<impl IntoResponse, AppError> {
    let rsn = RsnService::new(&state.db)
        .add(AddRsnParams::from_dto(guild_id, user_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(rsn.into_dto())))
}

/// DELETE /guilds/{guild_id}/users/{user_id}/rsn/{rsn}
pub async fn remove_rsn(
    State(state): State<AppState>,
    ApiPath((guild_id, user_id, rsn)): ApiPath<(u64, u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    RsnService::new(&state.db)
        .remove(guild_id, user_id, &rsn)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
