use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::error::store::StoreResult;

pub struct GuildBossRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuildBossRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        guild_id: u64,
        boss_name: &str,
    ) -> StoreResult<Option<entity::guild_boss::Model>> {
        Ok(
            entity::prelude::GuildBoss::find_by_id((guild_id as i64, boss_name.to_string()))
                .one(self.db)
                .await?,
        )
    }

    pub async fn get_by_guild(
        &self,
        guild_id: u64,
    ) -> StoreResult<Vec<entity::guild_boss::Model>> {
        Ok(entity::prelude::GuildBoss::find()
            .filter(entity::guild_boss::Column::GuildId.eq(guild_id as i64))
            .order_by_asc(entity::guild_boss::Column::BossName)
            .all(self.db)
            .await?)
    }

    /// Starts tracking a boss. Tracking an already tracked boss keeps its best run.
    pub async fn track(
        &self,
        guild_id: u64,
        boss_name: &str,
    ) -> StoreResult<entity::guild_boss::Model> {
        entity::prelude::GuildBoss::insert(entity::guild_boss::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            boss_name: ActiveValue::Set(boss_name.to_string()),
            pb_run_id: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::columns([
                entity::guild_boss::Column::GuildId,
                entity::guild_boss::Column::BossName,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let boss = self.find(guild_id, boss_name).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Boss {} not found after tracking", boss_name))
        })?;

        Ok(boss)
    }

    /// Stops tracking a boss. Its runs are kept.
    pub async fn untrack(&self, guild_id: u64, boss_name: &str) -> StoreResult<u64> {
        let result =
            entity::prelude::GuildBoss::delete_by_id((guild_id as i64, boss_name.to_string()))
                .exec(self.db)
                .await?;

        Ok(result.rows_affected)
    }

    /// Points the guild's best for a boss at `run_id`.
    ///
    /// # Returns
    /// - `Ok(1)` - Pointer moved
    /// - `Ok(0)` - The guild does not track the boss
    pub async fn set_personal_best(
        &self,
        guild_id: u64,
        boss_name: &str,
        run_id: i32,
    ) -> StoreResult<u64> {
        let result = entity::prelude::GuildBoss::update_many()
            .col_expr(
                entity::guild_boss::Column::PbRunId,
                sea_orm::sea_query::Expr::value(run_id),
            )
            .filter(entity::guild_boss::Column::GuildId.eq(guild_id as i64))
            .filter(entity::guild_boss::Column::BossName.eq(boss_name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
