use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::server::error::store::StoreResult;

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds every user to a run's team in one statement.
    ///
    /// The run must already exist. Unregistered users fail with a foreign key
    /// violation.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of team rows inserted
    pub async fn create_many(&self, guild_id: u64, run_id: i32, user_ids: &[u64]) -> StoreResult<u64> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let rows = user_ids.iter().map(|user_id| entity::team::ActiveModel {
            run_id: ActiveValue::Set(run_id),
            user_id: ActiveValue::Set(*user_id as i64),
            guild_id: ActiveValue::Set(guild_id as i64),
        });

        let inserted = entity::prelude::Team::insert_many(rows)
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted)
    }

    pub async fn get_by_run_ids(&self, run_ids: &[i32]) -> StoreResult<Vec<entity::team::Model>> {
        if run_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(entity::prelude::Team::find()
            .filter(entity::team::Column::RunId.is_in(run_ids.to_vec()))
            .all(self.db)
            .await?)
    }
}
