use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait};

use crate::server::{
    error::store::StoreResult,
    model::guild::{CreateGuildParams, UpdateGuildParams},
};

pub struct GuildRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuildRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a guild. Fails with a unique violation if the guild exists.
    pub async fn create(&self, params: &CreateGuildParams) -> StoreResult<entity::guild::Model> {
        let guild = entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(params.guild_id as i64),
            multiplier: ActiveValue::Set(params.multiplier),
            pb_channel_id: ActiveValue::Set(params.pb_channel_id.map(|id| id as i64)),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(guild)
    }

    pub async fn find_by_id(&self, guild_id: u64) -> StoreResult<Option<entity::guild::Model>> {
        Ok(entity::prelude::Guild::find_by_id(guild_id as i64)
            .one(self.db)
            .await?)
    }

    /// Replaces a guild's settings.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated guild
    /// - `Ok(None)` - Guild does not exist
    pub async fn update(
        &self,
        params: &UpdateGuildParams,
    ) -> StoreResult<Option<entity::guild::Model>> {
        let Some(guild) = self.find_by_id(params.guild_id).await? else {
            return Ok(None);
        };

        let mut active: entity::guild::ActiveModel = guild.into();
        active.multiplier = ActiveValue::Set(params.multiplier);
        active.pb_channel_id = ActiveValue::Set(params.pb_channel_id.map(|id| id as i64));

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a guild. Owned rows go with it through cascading foreign keys.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of guilds deleted (0 or 1)
    pub async fn delete(&self, guild_id: u64) -> StoreResult<u64> {
        let result = entity::prelude::Guild::delete_by_id(guild_id as i64)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
