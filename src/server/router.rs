use std::{sync::Arc, time::Duration};

use axum::{
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::server::{
    config::Config,
    controller::{
        competition::settle_competition,
        event::{create_event, get_event},
        guild::{create_guild, delete_guild, get_guild, update_guild},
        health::health,
        point_source::{delete_point_source, list_point_sources, upsert_point_source},
        points::{award_custom_points, award_points},
        rsn::{add_rsn, list_rsns, remove_rsn},
        time::{list_bosses, list_runs, submit_run, track_boss, untrack_boss},
        user::{delete_user, get_user, leaderboard, register_user},
    },
    error::{config::ConfigError, AppError},
    middleware::{
        auth::require_token,
        rate_limit::{rate_limited_body, replenish_interval_ms},
    },
    state::AppState,
};

/// Routes under `/guilds`. All of them require the bearer token.
fn guild_routes() -> Router<AppState> {
    Router::new()
        .route("/guilds", post(create_guild))
        .route(
            "/guilds/{guild_id}",
            get(get_guild).put(update_guild).delete(delete_guild),
        )
        .route(
            "/guilds/{guild_id}/users",
            get(leaderboard).post(register_user),
        )
        .route(
            "/guilds/{guild_id}/users/{user_id}",
            get(get_user).delete(delete_user),
        )
        // `{user_id}` holds a comma-separated list on the two points routes.
        .route(
            "/guilds/{guild_id}/users/{user_id}/points/{point_event}",
            put(award_points),
        )
        .route(
            "/guilds/{guild_id}/users/{user_id}/points/custom/{points}",
            put(award_custom_points),
        )
        .route(
            "/guilds/{guild_id}/users/{user_id}/rsn",
            get(list_rsns).post(add_rsn),
        )
        .route(
            "/guilds/{guild_id}/users/{user_id}/rsn/{rsn}",
            delete(remove_rsn),
        )
        .route("/guilds/{guild_id}/points", get(list_point_sources))
        .route(
            "/guilds/{guild_id}/points/{source}",
            put(upsert_point_source).delete(delete_point_source),
        )
        .route(
            "/guilds/{guild_id}/times",
            get(list_runs).post(submit_run),
        )
        .route("/guilds/{guild_id}/bosses", get(list_bosses))
        .route(
            "/guilds/{guild_id}/bosses/{boss}",
            put(track_boss).delete(untrack_boss),
        )
        .route("/guilds/{guild_id}/events", post(create_event))
        .route("/guilds/{guild_id}/events/{event_id}", get(get_event))
        .route(
            "/guilds/{guild_id}/wom/competition/{competition_id}/cutoff/{cutoff}",
            get(settle_competition),
        )
}

/// Builds the full application router with its middleware stack.
///
/// Layers, outermost first: trace, CORS, rate limit, timeout, then the bearer check on
/// `/guilds`. A timed out request drops its future, which rolls back any open
/// transaction.
pub fn router(config: &Config, state: AppState) -> Result<Router, AppError> {
    let governor = GovernorConfigBuilder::default()
        .per_millisecond(replenish_interval_ms(config.rate_limit_per_second))
        .burst_size(config.rate_limit_burst)
        .finish()
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "RATE_LIMIT_BURST".to_string(),
            reason: "burst size must be greater than 0".to_string(),
        })?;

    let guilds = guild_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        require_token,
    ));

    let router = Router::new()
        .route("/health", get(health))
        .merge(guilds)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(GovernorLayer::new(Arc::new(governor)))
        .layer(middleware::map_response(rate_limited_body))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
