//! Guild factory for creating test guild entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guilds with customizable fields.
///
/// Defaults:
/// - guild_id: auto-incremented unique id
/// - multiplier: `1.0`
/// - pb_channel_id: `None`
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    multiplier: f64,
    pb_channel_id: Option<i64>,
}

impl<'a> GuildFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id() as i64,
            multiplier: 1.0,
            pb_channel_id: None,
        }
    }

    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn pb_channel_id(mut self, pb_channel_id: Option<i64>) -> Self {
        self.pb_channel_id = pb_channel_id;
        self
    }

    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            multiplier: ActiveValue::Set(self.multiplier),
            pb_channel_id: ActiveValue::Set(self.pb_channel_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild with default values.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}
