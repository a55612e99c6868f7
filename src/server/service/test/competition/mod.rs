use crate::server::{
    data::user::UserRepository,
    error::{competition::CompetitionError, points::PointsError, AppError},
    model::competition::{
        Competition, CompetitionParticipation, Player, Progress, SettleCompetitionParams,
    },
    service::competition::CompetitionService,
    wom::WomClient,
};
use axum::{http::StatusCode, routing::get, Router};
use test_utils::{builder::TestBuilder, factory};


/// Client pointed at a closed local port; only `settle` ever uses it.
fn offline_wom() -> WomClient {
    WomClient::new(reqwest::Client::new(), "http://127.0.0.1:9")
}

/// Client pointed at a local server that answers every competition lookup with
/// `status` and `body`.
async fn stub_wom(status: StatusCode, body: &'static str) -> WomClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/competitions/{id}", get(move || async move { (status, body) }));

    tokio::spawn(async move { axum::serve(listener, app).await });

    WomClient::new(reqwest::Client::new(), format!("http://{addr}"))
}

fn participant(player_id: i64, display_name: &str, gained: f64) -> CompetitionParticipation {
    CompetitionParticipation {
        player: Player {
            id: player_id,
            username: display_name.to_lowercase(),
            display_name: display_name.to_string(),
        },
        progress: Progress {
            start: 0.0,
            end: gained,
            gained,
        },
    }
}

fn competition(participations: Vec<CompetitionParticipation>) -> Competition {
    Competition {
        id: 42,
        title: "Skill of the Week".to_string(),
        metric: "woodcutting".to_string(),
        participant_count: participations.len() as u32,
        participations,
    }
}

fn params(guild_id: i64, cutoff: f64) -> SettleCompetitionParams {
    SettleCompetitionParams {
        guild_id: guild_id as u64,
        competition_id: 42,
        cutoff,
    }
}

async fn balance(db: &sea_orm::DatabaseConnection, guild_id: i64, user_id: i64) -> i64 {
    UserRepository::new(db)
        .find_by_id(guild_id as u64, user_id as u64)
        .await
        .unwrap()
        .unwrap()
        .points
}
