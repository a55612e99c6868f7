use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::user::{CreateUserDto, UserListQuery},
    server::{
        error::AppError,
        model::user::{LeaderboardEntry, UserFilter},
        service::user::UserService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// GET /guilds/{guild_id}/users - Leaderboard
///
/// # Query Parameters
/// - `min_points`: Only users with at least this many points
/// - `limit`: Maximum number of users (capped at 1000)
///
/// # Returns
/// - `200 OK`: JSON array of LeaderboardEntryDto, highest balance first
pub async fn leaderboard(
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
    ApiQuery(query): ApiQuery<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = UserFilter {
        min_points: query.min_points,
        limit: query.limit,
    };

    let entries = UserService::new(&state.db)
        .leaderboard(guild_id, filter)
        .await?;

    let entries_dto: Vec<_> = entries.into_iter().map(LeaderboardEntry::into_dto).collect();

    Ok((StatusCode::OK, Json(entries_dto)))
}

/// POST /guilds/{guild_id}/users - Register a user with a zero balance
///
/// # Returns
/// - `201 Created`: UserDto
/// - `404 Not Found`: Guild does not exist
/// - `409 Conflict`: User already registered
pub async fn register_user(
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
    ApiJson(payload): ApiJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .register(guild_id, payload.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// GET /guilds/{guild_id}/users/{user_id} - User with balance and aliases
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get(guild_id, user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// DELETE /guilds/{guild_id}/users/{user_id}
///
/// Removes the user with their aliases and team and event history.
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath((guild_id, user_id)): ApiPath<(u64, u64)>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(guild_id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
