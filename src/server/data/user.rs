use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{error::store::StoreResult, model::user::UserFilter};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a user in a guild with a zero balance.
    pub async fn create(&self, guild_id: u64, user_id: u64) -> StoreResult<entity::user::Model> {
        let user = entity::user::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            user_id: ActiveValue::Set(user_id as i64),
            points: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> StoreResult<Option<entity::user::Model>> {
        Ok(
            entity::prelude::User::find_by_id((guild_id as i64, user_id as i64))
                .one(self.db)
                .await?,
        )
    }

    /// Removes a user and, through cascades, their aliases and team rows.
    pub async fn delete(&self, guild_id: u64, user_id: u64) -> StoreResult<u64> {
        let result = entity::prelude::User::delete_by_id((guild_id as i64, user_id as i64))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Lists users ordered by points descending, ties broken by user id.
    pub async fn filter(
        &self,
        guild_id: u64,
        filter: &UserFilter,
    ) -> StoreResult<Vec<entity::user::Model>> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::GuildId.eq(guild_id as i64));

        if let Some(min_points) = filter.min_points {
            query = query.filter(entity::user::Column::Points.gte(min_points));
        }

        query = query
            .order_by_desc(entity::user::Column::Points)
            .order_by_asc(entity::user::Column::UserId);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        Ok(query.all(self.db).await?)
    }

    /// Adds `delta` to the balance of every listed user in one statement.
    ///
    /// Runs `points = points + delta` in the store. A negative delta only applies to
    /// users whose balance covers it, so no balance goes below zero. Callers compare
    /// the returned count with the number of ids to detect missing users.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the users belong to
    /// - `user_ids` - Distinct user ids to credit
    /// - `delta` - Signed amount to add
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users updated
    pub async fn add_points(&self, guild_id: u64, user_ids: &[u64], delta: i64) -> StoreResult<u64> {
        let ids: Vec<i64> = user_ids.iter().map(|id| *id as i64).collect();

        let mut update = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Points,
                Expr::col(entity::user::Column::Points).add(delta),
            )
            .filter(entity::user::Column::GuildId.eq(guild_id as i64))
            .filter(entity::user::Column::UserId.is_in(ids));

        if delta < 0 {
            update = update.filter(entity::user::Column::Points.gte(delta.saturating_neg()));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Fetches the listed users that exist in the guild.
    pub async fn get_by_ids(
        &self,
        guild_id: u64,
        user_ids: &[u64],
    ) -> StoreResult<Vec<entity::user::Model>> {
        let ids: Vec<i64> = user_ids.iter().map(|id| *id as i64).collect();

        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::GuildId.eq(guild_id as i64))
            .filter(entity::user::Column::UserId.is_in(ids))
            .all(self.db)
            .await?)
    }
}
