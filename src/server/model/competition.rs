//! Wise Old Man competition payloads and settlement models.
//!
//! Only the fields settlement needs are decoded; unknown fields are ignored.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::{
    model::competition::CompetitionSettlementDto,
    server::{error::validation::ValidationErrors, model::points::UserBalance},
};

/// `GET /competitions/{id}` response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: u64,
    pub title: String,
    pub metric: String,
    #[serde(default)]
    pub participant_count: u32,
    #[serde(default)]
    pub participations: Vec<CompetitionParticipation>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompetitionParticipation {
    pub player: Player,
    pub progress: Progress,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub username: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Progress {
    pub start: f64,
    pub end: f64,
    pub gained: f64,
}

/// Participants whose gain meets the cutoff. Equal to the cutoff qualifies.
pub fn filter_by_cutoff(
    participations: &[CompetitionParticipation],
    cutoff: f64,
) -> Vec<&CompetitionParticipation> {
    participations
        .iter()
        .filter(|p| p.progress.gained >= cutoff)
        .collect()
}

/// Maps qualifying participants to registered users of a guild.
///
/// A participant matches an alias when its display name equals the RSN ignoring case,
/// or when its player id equals the alias's Wise Old Man id. A user with several
/// matching aliases is returned once. The result is sorted by user id.
pub fn resolve_participants(
    qualified: &[&CompetitionParticipation],
    aliases: &[entity::rsn::Model],
) -> Vec<u64> {
    let mut users = BTreeSet::new();

    for participation in qualified {
        let display_name = participation.player.display_name.to_lowercase();

        for alias in aliases {
            if alias.rsn.to_lowercase() == display_name
                || alias.wom_id == Some(participation.player.id)
            {
                users.insert(alias.user_id as u64);
            }
        }
    }

    users.into_iter().collect()
}

#[derive(Debug, Clone)]
pub struct SettleCompetitionParams {
    pub guild_id: u64,
    pub competition_id: u64,
    /// Minimum progress gained to be credited.
    pub cutoff: f64,
}

impl SettleCompetitionParams {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            self.cutoff.is_finite() && self.cutoff >= 0.0,
            "cutoff",
            self.cutoff,
            "min",
            "cutoff must be a finite number of at least 0",
        );
        errors.into_result()
    }
}

/// Outcome of a committed competition settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionSettlement {
    pub competition_id: u64,
    pub title: String,
    pub cutoff: f64,
    pub given: i64,
    pub users: Vec<UserBalance>,
}

impl CompetitionSettlement {
    pub fn into_dto(self) -> CompetitionSettlementDto {
        CompetitionSettlementDto {
            competition_id: self.competition_id,
            title: self.title,
            cutoff: self.cutoff,
            given: self.given,
            users: self.users.into_iter().map(UserBalance::into_dto).collect(),
        }
    }
}
