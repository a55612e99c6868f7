//! Point source factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Registers a named point source worth `points` for a guild.
pub async fn create_point_source(
    db: &DatabaseConnection,
    guild_id: i64,
    source: &str,
    points: i64,
) -> Result<entity::point_source::Model, DbErr> {
    entity::point_source::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        source: ActiveValue::Set(source.to_string()),
        points: ActiveValue::Set(points),
    }
    .insert(db)
    .await
}
