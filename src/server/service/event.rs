//! Guild events and their recorded participations.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{event::EventRepository, participation::ParticipationRepository, user::UserRepository},
    error::AppError,
    model::event::{CreateEventParams, Event},
    service::{format_ids, missing_parent},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an event with its placements. All participants must be registered.
    ///
    /// # Returns
    /// - `Ok(Event)` - Stored event
    /// - `Err(AppError::ValidationErr)` - Bad name, placement or repeated participant
    /// - `Err(AppError::NotFound)` - Guild or a participant not found; nothing stored
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        let event = EventRepository::new(&txn)
            .create(params.guild_id, &params.name, params.wom_competition_id)
            .await
            .map_err(|e| missing_parent(e, || format!("guild {} not found", params.guild_id)))?;

        let user_ids: Vec<u64> = params.participations.iter().map(|p| p.user_id).collect();
        let registered = UserRepository::new(&txn)
            .get_by_ids(params.guild_id, &user_ids)
            .await?;
        if registered.len() != user_ids.len() {
            let missing: Vec<u64> = user_ids
                .into_iter()
                .filter(|id| !registered.iter().any(|u| u.user_id as u64 == *id))
                .collect();
            return Err(AppError::NotFound(format!(
                "users not found in guild: {}",
                format_ids(&missing)
            )));
        }

        let participation_repo = ParticipationRepository::new(&txn);
        participation_repo
            .create_many(params.guild_id, event.id, &params.participations)
            .await?;
        let participations = participation_repo.get_by_event(event.id).await?;

        txn.commit().await?;

        tracing::info!(
            guild_id = params.guild_id,
            event_id = event.id,
            participants = participations.len(),
            "Recorded event"
        );

        Ok(Event::from_entity(event, participations))
    }

    pub async fn get(&self, guild_id: u64, event_id: i32) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db)
            .find(guild_id, event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("event {} not found", event_id)))?;

        let participations = ParticipationRepository::new(self.db)
            .get_by_event(event.id)
            .await?;

        Ok(Event::from_entity(event, participations))
    }
}
