use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::event::CreateEventDto,
    server::{
        error::AppError,
        model::event::CreateEventParams,
        service::event::EventService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// POST /guilds/{guild_id}/events - Record an event with its placements
///
/// # Returns
/// - `201 Created`: EventDto
/// - `404 Not Found`: Guild or a participant not found
/// - `422 Unprocessable Entity`: Bad name, placement or repeated participant
pub async fn create_event(
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
    ApiJson(payload): ApiJson<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .create(CreateEventParams::from_dto(guild_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// GET /guilds/{guild_id}/events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    ApiPath((guild_id, event_id)): ApiPath<(u64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get(guild_id, event_id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}
