use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::time::{RunListQuery, SubmitRunDto},
    server::{
        error::AppError,
        model::time::{GuildBoss, Run, RunFilter, SubmitRunParams},
        service::time::TimeService,
        state::AppState,
        util::{
            extract::{ApiJson, ApiPath, ApiQuery},
            validate::normalize_boss_name,
        },
    },
};

/// GET /guilds/{guild_id}/times - List runs, newest first
///
/// # Query Parameters
/// - `boss`: Only runs on this boss
/// - `user_id`: Only runs this user took part in
/// - `limit`: Maximum number of runs (capped at 500)
pub async fn list_runs(
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
    ApiQuery(query): ApiQuery<RunListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = RunFilter {
        boss_name: query.boss.as_deref().map(normalize_boss_name),
        user_id: query.user_id,
        limit: query.limit,
    };

    let runs = TimeService::new(&state.db).list(guild_id, filter).await?;

    let runs_dto: Vec<_> = runs.into_iter().map(Run::into_dto).collect();

    Ok((StatusCode::OK, Json(runs_dto)))
}

/// POST /guilds/{guild_id}/times - Record a run and its team
///
/// # Returns
/// - `201 Created`: RunSubmissionDto; `personal_best` tells whether the guild's best moved
/// - `404 Not Found`: Guild or a team member not found (nothing stored), or the boss is
///   not tracked (the run is stored)
/// - `422 Unprocessable Entity`: Bad boss name, duration or team
pub async fn submit_run(
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
    ApiJson(payload): ApiJson<SubmitRunDto>,
) -> Result<impl IntoResponse, AppError> {
    let submission = TimeService::new(&state.db)
        .submit(SubmitRunParams::from_dto(guild_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(submission.into_dto())))
}

/// GET /guilds/{guild_id}/bosses - Tracked bosses with the guild's best run on each
pub async fn list_bosses(
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
) -> Result<impl IntoResponse, AppError> {
    let bosses = TimeService::new(&state.db).bosses(guild_id).await?;

    let bosses_dto: Vec<_> = bosses.into_iter().map(GuildBoss::into_dto).collect();

    Ok((StatusCode::OK, Json(bosses_dto)))
}

/// PUT /guilds/{guild_id}/bosses/{boss} - Start tracking a boss
pub async fn track_boss(
    State(state): State<AppState>,
    ApiPath((guild_id, boss)): ApiPath<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let boss = TimeService::new(&state.db).track(guild_id, &boss).await?;

    Ok((StatusCode::OK, Json(boss.into_dto())))
}

/// DELETE /guilds/{guild_id}/bosses/{boss} - Stop tracking a boss, keeping its runs
pub async fn untrack_boss(
    State(state): State<AppState>,
    ApiPath((guild_id, boss)): ApiPath<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    TimeService::new(&state.db).untrack(guild_id, &boss).await?;

    Ok(StatusCode::NO_CONTENT)
}
