use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::points::CustomPointsDto,
    server::{
        error::AppError,
        model::points::{AwardPointsParams, CustomPointsParams},
        service::points::PointsService,
        state::AppState,
        util::{extract::ApiPath, parse::parse_user_ids},
    },
};

/// PUT /guilds/{guild_id}/users/{user_ids}/points/{point_event} - Award a point source
///
/// Credits the guild's value for `point_event` to every listed user. `user_ids` is a
/// comma-separated list; a user listed twice is credited twice.
///
/// # Returns
/// - `200 OK`: PointsUpdateDto with each user's new balance
/// - `404 Not Found`: Unknown point source, or some users are not registered
/// - `422 Unprocessable Entity`: Malformed id list or source name
pub async fn award_points(
    State(state): State<AppState>,
    ApiPath((guild_id, user_ids, source)): ApiPath<(u64, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let params = AwardPointsParams {
        guild_id,
        user_ids: parse_user_ids(&user_ids)?,
        source,
    };

    let update = PointsService::new(&state.db).award(params).await?;

    Ok((StatusCode::OK, Json(update.into_dto())))
}

/// PUT /guilds/{guild_id}/users/{user_ids}/points/custom/{points} - Apply a custom amount
///
/// Negative amounts debit. The optional JSON body `{ "reason": ... }` is logged only.
///
/// # Returns
/// - `200 OK`: PointsUpdateDto with each user's new balance
/// - `404 Not Found`: Some users are not registered
/// - `409 Conflict`: A debit exceeds a balance
/// - `422 Unprocessable Entity`: Zero amount, malformed id list or overlong reason
pub async fn award_custom_points(
    State(state): State<AppState>,
    ApiPath((guild_id, user_ids, delta)): ApiPath<(u64, String, i64)>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let reason = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        serde_json::from_slice::<CustomPointsDto>(&body)
            .map_err(|e| AppError::BadRequest(format!("Failed to parse request body: {}", e)))?
            .reason
    };

    let params = CustomPointsParams {
        guild_id,
        user_ids: parse_user_ids(&user_ids)?,
        delta,
        reason,
    };

    let update = PointsService::new(&state.db).award_custom(params).await?;

    Ok((StatusCode::OK, Json(update.into_dto())))
}
