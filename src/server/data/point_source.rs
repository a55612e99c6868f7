use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{error::store::StoreResult, model::points::UpsertPointSourceParams};

pub struct PointSourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PointSourceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        guild_id: u64,
        source: &str,
    ) -> StoreResult<Option<entity::point_source::Model>> {
        Ok(
            entity::prelude::PointSource::find_by_id((guild_id as i64, source.to_string()))
                .one(self.db)
                .await?,
        )
    }

    pub async fn get_by_guild(
        &self,
        guild_id: u64,
    ) -> StoreResult<Vec<entity::point_source::Model>> {
        Ok(entity::prelude::PointSource::find()
            .filter(entity::point_source::Column::GuildId.eq(guild_id as i64))
            .order_by_asc(entity::point_source::Column::Source)
            .all(self.db)
            .await?)
    }

    /// Creates the source or replaces its value.
    pub async fn upsert(
        &self,
        params: &UpsertPointSourceParams,
    ) -> StoreResult<entity::point_source::Model> {
        entity::prelude::PointSource::insert(entity::point_source::ActiveModel {
            guild_id: ActiveValue::Set(params.guild_id as i64),
            source: ActiveValue::Set(params.source.clone()),
            points: ActiveValue::Set(params.points),
        })
        .on_conflict(
            OnConflict::columns([
                entity::point_source::Column::GuildId,
                entity::point_source::Column::Source,
            ])
            .update_column(entity::point_source::Column::Points)
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let source = self.find(params.guild_id, &params.source).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Point source {} not found after upsert",
                params.source
            ))
        })?;

        Ok(source)
    }

    pub async fn delete(&self, guild_id: u64, source: &str) -> StoreResult<u64> {
        let result =
            entity::prelude::PointSource::delete_by_id((guild_id as i64, source.to_string()))
                .exec(self.db)
                .await?;

        Ok(result.rows_affected)
    }
}
