use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::server::{error::store::StoreResult, model::event::Participation};

pub struct ParticipationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts all participations of an event in one statement.
    pub async fn create_many(
        &self,
        guild_id: u64,
        event_id: i32,
        participations: &[Participation],
    ) -> StoreResult<u64> {
        if participations.is_empty() {
            return Ok(0);
        }

        let rows = participations
            .iter()
            .map(|p| entity::participation::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                user_id: ActiveValue::Set(p.user_id as i64),
                guild_id: ActiveValue::Set(guild_id as i64),
                placement: ActiveValue::Set(p.placement),
            });

        let inserted = entity::prelude::Participation::insert_many(rows)
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted)
    }

    pub async fn get_by_event(
        &self,
        event_id: i32,
    ) -> StoreResult<Vec<entity::participation::Model>> {
        Ok(entity::prelude::Participation::find()
            .filter(entity::participation::Column::EventId.eq(event_id))
            .all(self.db)
            .await?)
    }
}
