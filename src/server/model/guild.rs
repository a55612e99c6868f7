//! Guild domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::guild::{CreateGuildDto, GuildDto, UpdateGuildDto},
    server::error::validation::ValidationErrors,
};

/// A guild, the tenancy boundary for every other record.
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    pub guild_id: u64,
    /// Stored for clients; settlement does not apply it.
    pub multiplier: f64,
    /// Channel that receives personal-best announcements.
    pub pb_channel_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl Guild {
    /// Converts an entity model to a guild domain model at the repository boundary.
    pub fn from_entity(entity: entity::guild::Model) -> Self {
        Self {
            guild_id: entity.guild_id as u64,
            multiplier: entity.multiplier,
            pb_channel_id: entity.pb_channel_id.map(|id| id as u64),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            guild_id: self.guild_id,
            multiplier: self.multiplier,
            pb_channel_id: self.pb_channel_id,
            created_at: self.created_at,
        }
    }
}

fn check_multiplier(errors: &mut ValidationErrors, multiplier: f64) {
    errors.check(
        multiplier.is_finite() && multiplier > 0.0,
        "multiplier",
        multiplier,
        "positive",
        "multiplier must be greater than 0",
    );
}

#[derive(Debug, Clone)]
pub struct CreateGuildParams {
    pub guild_id: u64,
    pub multiplier: f64,
    pub pb_channel_id: Option<u64>,
}

impl CreateGuildParams {
    pub fn from_dto(dto: CreateGuildDto) -> Self {
        Self {
            guild_id: dto.guild_id,
            multiplier: dto.multiplier,
            pb_channel_id: dto.pb_channel_id,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_multiplier(&mut errors, self.multiplier);
        errors.into_result()
    }
}

/// Replaces a guild's settings.
#[derive(Debug, Clone)]
pub struct UpdateGuildParams {
    pub guild_id: u64,
    pub multiplier: f64,
    pub pb_channel_id: Option<u64>,
}

impl UpdateGuildParams {
    pub fn from_dto(guild_id: u64, dto: UpdateGuildDto) -> Self {
        Self {
            guild_id,
            multiplier: dto.multiplier,
            pb_channel_id: dto.pb_channel_id,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_multiplier(&mut errors, self.multiplier);
        errors.into_result()
    }
}
