use sea_orm::DatabaseConnection;

use crate::server::{
    data::point_source::PointSourceRepository,
    error::AppError,
    model::points::{PointSource, UpsertPointSourceParams},
    service::missing_parent,
};

pub struct PointSourceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PointSourceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, guild_id: u64) -> Result<Vec<PointSource>, AppError> {
        let sources = PointSourceRepository::new(self.db)
            .get_by_guild(guild_id)
            .await?;

        Ok(sources.into_iter().map(PointSource::from_entity).collect())
    }

    /// Creates a point source or replaces its value.
    pub async fn upsert(&self, params: UpsertPointSourceParams) -> Result<PointSource, AppError> {
        params.validate()?;

        let source = PointSourceRepository::new(self.db)
            .upsert(&params)
            .await
            .map_err(|e| missing_parent(e, || format!("guild {} not found", params.guild_id)))?;

        tracing::info!(
            guild_id = params.guild_id,
            source = %params.source,
            points = params.points,
            "Set point source"
        );

        Ok(PointSource::from_entity(source))
    }

    pub async fn delete(&self, guild_id: u64, source: &str) -> Result<(), AppError> {
        let deleted = PointSourceRepository::new(self.db)
            .delete(guild_id, source)
            .await?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "point source '{}' not found",
                source
            )));
        }

        Ok(())
    }
}
