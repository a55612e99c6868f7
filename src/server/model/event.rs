use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{
    model::event::{CreateEventDto, EventDto, ParticipationDto},
    server::{error::validation::ValidationErrors, util::validate::MAX_EVENT_NAME_LEN},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Participation {
    pub user_id: u64,
    pub placement: i32,
}

impl Participation {
    pub fn from_entity(entity: entity::participation::Model) -> Self {
        Self {
            user_id: entity.user_id as u64,
            placement: entity.placement,
        }
    }

    pub fn into_dto(self) -> ParticipationDto {
        ParticipationDto {
            user_id: self.user_id,
            placement: self.placement,
        }
    }
}

/// A guild event with its participations ordered by placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub guild_id: u64,
    pub name: String,
    pub wom_competition_id: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub participations: Vec<Participation>,
}

impl Event {
    pub fn from_entity(
        entity: entity::event::Model,
        participations: Vec<entity::participation::Model>,
    ) -> Self {
        let mut participations: Vec<Participation> = participations
            .into_iter()
            .map(Participation::from_entity)
            .collect();
        participations.sort_by_key(|p| (p.placement, p.user_id));

        Self {
            id: entity.id,
            guild_id: entity.guild_id as u64,
            name: entity.name,
            wom_competition_id: entity.wom_competition_id.map(|id| id as u64),
            created_at: entity.created_at,
            participations,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            name: self.name,
            wom_competition_id: self.wom_competition_id,
            created_at: self.created_at,
            participations: self
                .participations
                .into_iter()
                .map(Participation::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub guild_id: u64,
    pub name: String,
    pub wom_competition_id: Option<u64>,
    pub participations: Vec<Participation>,
}

impl CreateEventParams {
    pub fn from_dto(guild_id: u64, dto: CreateEventDto) -> Self {
        Self {
            guild_id,
            name: dto.name.trim().to_string(),
            wom_competition_id: dto.wom_competition_id,
            participations: dto
                .participations
                .into_iter()
                .map(|p| Participation {
                    user_id: p.user_id,
                    placement: p.placement,
                })
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            (1..=MAX_EVENT_NAME_LEN).contains(&self.name.chars().count()),
            "name",
            &self.name,
            "length",
            format!("event name must be 1 to {} characters", MAX_EVENT_NAME_LEN),
        );

        let mut seen = HashSet::new();
        for p in &self.participations {
            errors
                .check(
                    p.placement >= 1,
                    "participations.placement",
                    p.placement,
                    "min",
                    "placement must be at least 1",
                )
                .check(
                    seen.insert(p.user_id),
                    "participations.user_id",
                    p.user_id,
                    "unique",
                    "a user can only participate once",
                );
        }
        errors.into_result()
    }
}
