//! Run and team factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a run for `boss_name` and a team row for every user in `user_ids`.
///
/// # Returns
/// - `Ok(entity::run::Model)` - The created run
/// - `Err(DbErr)` - Database error, e.g. when a user is not registered in the guild
pub async fn create_run(
    db: &DatabaseConnection,
    guild_id: i64,
    boss_name: &str,
    duration_ms: i64,
    user_ids: &[i64],
) -> Result<entity::run::Model, DbErr> {
    let run = entity::run::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        boss_name: ActiveValue::Set(boss_name.to_string()),
        duration_ms: ActiveValue::Set(duration_ms),
        recorded_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for user_id in user_ids {
        entity::team::ActiveModel {
            run_id: ActiveValue::Set(run.id),
            user_id: ActiveValue::Set(*user_id),
            guild_id: ActiveValue::Set(guild_id),
        }
        .insert(db)
        .await?;
    }

    Ok(run)
}
