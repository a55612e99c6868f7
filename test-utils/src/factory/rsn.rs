//! RSN alias factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an RSN alias for an existing user without a WOM id.
pub async fn create_rsn(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    rsn: &str,
) -> Result<entity::rsn::Model, DbErr> {
    create_rsn_with_wom_id(db, guild_id, user_id, rsn, None).await
}

/// Creates an RSN alias for an existing user with an optional WOM id.
pub async fn create_rsn_with_wom_id(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    rsn: &str,
    wom_id: Option<i64>,
) -> Result<entity::rsn::Model, DbErr> {
    entity::rsn::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        rsn: ActiveValue::Set(rsn.to_string()),
        user_id: ActiveValue::Set(user_id),
        wom_id: ActiveValue::Set(wom_id),
    }
    .insert(db)
    .await
}
