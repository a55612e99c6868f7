use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{error::store::StoreResult, model::rsn::AddRsnParams};

pub struct RsnRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RsnRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links an RSN to a user.
    ///
    /// Fails with a unique violation if the RSN (or WOM id) is already linked in the
    /// guild, and with a foreign key violation if the user is not registered.
    pub async fn create(&self, params: &AddRsnParams) -> StoreResult<entity::rsn::Model> {
        let rsn = entity::rsn::ActiveModel {
            guild_id: ActiveValue::Set(params.guild_id as i64),
            rsn: ActiveValue::Set(params.rsn.clone()),
            user_id: ActiveValue::Set(params.user_id as i64),
            wom_id: ActiveValue::Set(params.wom_id),
        }
        .insert(self.db)
        .await?;

        Ok(rsn)
    }

    pub async fn get_by_user(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> StoreResult<Vec<entity::rsn::Model>> {
        Ok(entity::prelude::Rsn::find()
            .filter(entity::rsn::Column::GuildId.eq(guild_id as i64))
            .filter(entity::rsn::Column::UserId.eq(user_id as i64))
            .order_by_asc(entity::rsn::Column::Rsn)
            .all(self.db)
            .await?)
    }

    /// The alias in the guild spelled like `rsn` ignoring case, if any.
    pub async fn find_ignoring_case(
        &self,
        guild_id: u64,
        rsn: &str,
    ) -> StoreResult<Option<entity::rsn::Model>> {
        Ok(entity::prelude::Rsn::find()
            .filter(entity::rsn::Column::GuildId.eq(guild_id as i64))
            .filter(Func::lower(Expr::col(entity::rsn::Column::Rsn)).eq(rsn.to_lowercase()))
            .one(self.db)
            .await?)
    }

    /// Every alias in the guild, used to resolve competition display names.
    pub async fn get_by_guild(&self, guild_id: u64) -> StoreResult<Vec<entity::rsn::Model>> {
        Ok(entity::prelude::Rsn::find()
            .filter(entity::rsn::Column::GuildId.eq(guild_id as i64))
            .all(self.db)
            .await?)
    }

    /// Unlinks an RSN from a user. Matches the stored name exactly.
    pub async fn delete(&self, guild_id: u64, user_id: u64, rsn: &str) -> StoreResult<u64> {
        let result = entity::prelude::Rsn::delete_many()
            .filter(entity::rsn::Column::GuildId.eq(guild_id as i64))
            .filter(entity::rsn::Column::UserId.eq(user_id as i64))
            .filter(entity::rsn::Column::Rsn.eq(rsn))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
