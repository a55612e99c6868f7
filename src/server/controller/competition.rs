use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::server::{
    error::AppError,
    model::competition::SettleCompetitionParams,
    service::competition::CompetitionService,
    state::AppState,
    util::extract::ApiPath,
};

/// GET /guilds/{guild_id}/wom/competition/{competition_id}/cutoff/{cutoff} - Settle a
/// Wise Old Man competition
///
/// Credits the guild's `event_participation` value once to every registered user whose
/// progress gained is at least `cutoff`. Not idempotent: calling twice credits twice.
///
/// # Returns
/// - `200 OK`: CompetitionSettlementDto
/// - `404 Not Found`: No participants, none qualified, none resolved to a user, or the
///   guild has no `event_participation` source
/// - `422 Unprocessable Entity`: Negative or non-finite cutoff
/// - `503 Service Unavailable`: Wise Old Man could not be reached or answered badly
pub async fn settle_competition(
    State(state): State<AppState>,
    ApiPath((guild_id, competition_id, cutoff)): ApiPath<(u64, u64, f64)>,
) -> Result<impl IntoResponse, AppError> {
    let settlement = CompetitionService::new(&state.db, &state.wom)
        .settle(SettleCompetitionParams {
            guild_id,
            competition_id,
            cutoff,
        })
        .await?;

    Ok((StatusCode::OK, Json(settlement.into_dto())))
}
