use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{error::store::StoreResult, model::time::RunFilter};

pub struct RunRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RunRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a run and returns it with its generated id.
    pub async fn create(
        &self,
        guild_id: u64,
        boss_name: &str,
        duration_ms: i64,
    ) -> StoreResult<entity::run::Model> {
        let run = entity::run::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            boss_name: ActiveValue::Set(boss_name.to_string()),
            duration_ms: ActiveValue::Set(duration_ms),
            recorded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(run)
    }

    pub async fn find_by_id(&self, id: i32) -> StoreResult<Option<entity::run::Model>> {
        Ok(entity::prelude::Run::find_by_id(id).one(self.db).await?)
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> StoreResult<Vec<entity::run::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(entity::prelude::Run::find()
            .filter(entity::run::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?)
    }

    /// Lists a guild's runs, newest first.
    pub async fn filter(
        &self,
        guild_id: u64,
        filter: &RunFilter,
    ) -> StoreResult<Vec<entity::run::Model>> {
        let mut query = entity::prelude::Run::find()
            .filter(entity::run::Column::GuildId.eq(guild_id as i64));

        if let Some(boss_name) = &filter.boss_name {
            query = query.filter(entity::run::Column::BossName.eq(boss_name.as_str()));
        }

        // A user is on a run's team at most once, so the join yields no duplicates.
        if let Some(user_id) = filter.user_id {
            query = query
                .join(JoinType::InnerJoin, entity::run::Relation::Team.def())
                .filter(entity::team::Column::UserId.eq(user_id as i64));
        }

        query = query
            .order_by_desc(entity::run::Column::RecordedAt)
            .order_by_desc(entity::run::Column::Id);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        Ok(query.all(self.db).await?)
    }
}
