use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::server::error::store::StoreResult;

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        guild_id: u64,
        name: &str,
        wom_competition_id: Option<u64>,
    ) -> StoreResult<entity::event::Model> {
        let event = entity::event::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            name: ActiveValue::Set(name.to_string()),
            wom_competition_id: ActiveValue::Set(wom_competition_id.map(|id| id as i64)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(event)
    }

    /// Finds an event, scoped to its guild.
    pub async fn find(&self, guild_id: u64, id: i32) -> StoreResult<Option<entity::event::Model>> {
        Ok(entity::prelude::Event::find_by_id(id)
            .filter(entity::event::Column::GuildId.eq(guild_id as i64))
            .one(self.db)
            .await?)
    }
}
