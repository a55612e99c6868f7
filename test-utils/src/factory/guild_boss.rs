//! Tracked boss factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks `boss_name` as tracked by the guild with no personal best yet.
pub async fn create_guild_boss(
    db: &DatabaseConnection,
    guild_id: i64,
    boss_name: &str,
) -> Result<entity::guild_boss::Model, DbErr> {
    create_guild_boss_with_pb(db, guild_id, boss_name, None).await
}

/// Marks `boss_name` as tracked by the guild pointing at an existing run.
pub async fn create_guild_boss_with_pb(
    db: &DatabaseConnection,
    guild_id: i64,
    boss_name: &str,
    pb_run_id: Option<i32>,
) -> Result<entity::guild_boss::Model, DbErr> {
    entity::guild_boss::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        boss_name: ActiveValue::Set(boss_name.to_string()),
        pb_run_id: ActiveValue::Set(pb_run_id),
    }
    .insert(db)
    .await
}
