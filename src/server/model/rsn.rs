use crate::{
    model::rsn::{CreateRsnDto, RsnDto},
    server::{error::validation::ValidationErrors, util::validate::is_valid_rsn},
};

/// A RuneScape name linked to a guild member.
#[derive(Debug, Clone, PartialEq)]
pub struct Rsn {
    pub rsn: String,
    pub user_id: u64,
    /// Wise Old Man player id.
    pub wom_id: Option<i64>,
}

impl Rsn {
    pub fn from_entity(entity: entity::rsn::Model) -> Self {
        Self {
            rsn: entity.rsn,
            user_id: entity.user_id as u64,
            wom_id: entity.wom_id,
        }
    }

    pub fn into_dto(self) -> RsnDto {
        RsnDto {
            rsn: self.rsn,
            user_id: self.user_id,
            wom_id: self.wom_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddRsnParams {
    pub guild_id: u64,
    pub user_id: u64,
    pub rsn: String,
    pub wom_id: Option<i64>,
}

impl AddRsnParams {
    pub fn from_dto(guild_id: u64, user_id: u64, dto: CreateRsnDto) -> Self {
        Self {
            guild_id,
            user_id,
            rsn: dto.rsn,
            wom_id: dto.wom_id,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            is_valid_rsn(&self.rsn),
            "rsn",
            &self.rsn,
            "pattern",
            "RSN must be 1 to 12 characters of letters, digits, spaces, _ and -",
        );
        if let Some(wom_id) = self.wom_id {
            errors.check(wom_id > 0, "wom_id", wom_id, "positive", "WOM id must be positive");
        }
        errors.into_result()
    }
}
