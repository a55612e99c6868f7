use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild::GuildRepository,
    error::AppError,
    model::guild::{CreateGuildParams, Guild, UpdateGuildParams},
    service::already_exists,
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a guild.
    ///
    /// # Returns
    /// - `Ok(Guild)` - Created guild
    /// - `Err(AppError::ValidationErr)` - Multiplier not positive
    /// - `Err(AppError::Conflict)` - Guild already registered
    pub async fn create(&self, params: CreateGuildParams) -> Result<Guild, AppError> {
        params.validate()?;

        let guild = GuildRepository::new(self.db)
            .create(&params)
            .await
            .map_err(|e| {
                already_exists(e, || format!("guild {} already exists", params.guild_id))
            })?;

        tracing::info!(guild_id = params.guild_id, "Registered guild");

        Ok(Guild::from_entity(guild))
    }

    pub async fn get(&self, guild_id: u64) -> Result<Guild, AppError> {
        GuildRepository::new(self.db)
            .find_by_id(guild_id)
            .await?
            .map(Guild::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("guild {} not found", guild_id)))
    }

    pub async fn update(&self, params: UpdateGuildParams) -> Result<Guild, AppError> {
        params.validate()?;

        GuildRepository::new(self.db)
            .update(&params)
            .await?
            .map(Guild::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("guild {} not found", params.guild_id)))
    }

    /// Deletes a guild and everything it owns.
    pub async fn delete(&self, guild_id: u64) -> Result<(), AppError> {
        let deleted = GuildRepository::new(self.db).delete(guild_id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!("guild {} not found", guild_id)));
        }

        tracing::info!(guild_id, "Deleted guild");

        Ok(())
    }
}
