use crate::server::{
    error::AppError,
    model::time::{RunFilter, SubmitRunParams},
    service::time::TimeService,
};
use test_utils::{builder::TestBuilder, factory};

mod bosses;
mod submit;

fn run(guild_id: i64, boss: &str, duration_ms: i64, team: &[i64]) -> SubmitRunParams {
    SubmitRunParams {
        guild_id: guild_id as u64,
        boss_name: boss.to_string(),
        duration_ms,
        user_ids: team.iter().map(|id| *id as u64).collect(),
    }
}
