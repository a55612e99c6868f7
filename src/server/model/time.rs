//! Run time and personal-best models.
//!
//! A run is an immutable record of one boss kill. A guild's personal best for a boss
//! is a pointer from its tracked-boss row to one of those runs.

use chrono::{DateTime, Utc};

use crate::{
    model::time::{GuildBossDto, RunDto, RunSubmissionDto, SubmitRunDto},
    server::{
        error::validation::ValidationErrors,
        model::points::distinct_in_order,
        util::validate::{check_boss_name, check_user_ids, normalize_boss_name},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub id: i32,
    pub guild_id: u64,
    pub boss_name: String,
    pub duration_ms: i64,
    pub recorded_at: DateTime<Utc>,
    /// Team members, sorted by id.
    pub team: Vec<u64>,
}

impl Run {
    /// Converts a run row and its team rows to a domain model.
    pub fn from_entity(entity: entity::run::Model, team: Vec<entity::team::Model>) -> Self {
        let mut team: Vec<u64> = team.into_iter().map(|t| t.user_id as u64).collect();
        team.sort_unstable();

        Self {
            id: entity.id,
            guild_id: entity.guild_id as u64,
            boss_name: entity.boss_name,
            duration_ms: entity.duration_ms,
            recorded_at: entity.recorded_at,
            team,
        }
    }

    pub fn into_dto(self) -> RunDto {
        RunDto {
            id: self.id,
            boss_name: self.boss_name,
            duration_ms: self.duration_ms,
            recorded_at: self.recorded_at,
            team: self.team,
        }
    }
}

/// Result of recording a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSubmission {
    pub run: Run,
    /// The run moved the guild's personal-best pointer.
    pub personal_best: bool,
    /// Run the pointer referenced before this submission.
    pub previous_best: Option<Run>,
}

impl RunSubmission {
    pub fn into_dto(self) -> RunSubmissionDto {
        RunSubmissionDto {
            run: self.run.into_dto(),
            personal_best: self.personal_best,
            previous_best: self.previous_best.map(Run::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitRunParams {
    pub guild_id: u64,
    pub boss_name: String,
    pub duration_ms: i64,
    /// Distinct team members in request order.
    pub user_ids: Vec<u64>,
}

impl SubmitRunParams {
    /// Normalizes the boss name and drops repeated team members.
    pub fn from_dto(guild_id: u64, dto: SubmitRunDto) -> Self {
        Self {
            guild_id,
            boss_name: normalize_boss_name(&dto.boss_name),
            duration_ms: dto.duration_ms,
            user_ids: distinct_in_order(&dto.user_ids),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_boss_name(&mut errors, &self.boss_name);
        check_user_ids(&mut errors, &self.user_ids);
        errors.check(
            self.duration_ms > 0,
            "duration_ms",
            self.duration_ms,
            "positive",
            "duration must be greater than 0",
        );
        errors.into_result()
    }
}

/// Run listing filter. All fields are optional and combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunFilter {
    pub boss_name: Option<String>,
    /// Only runs this user took part in.
    pub user_id: Option<u64>,
    pub limit: Option<u64>,
}

/// A boss tracked by a guild and the guild's best run on it.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildBoss {
    pub boss_name: String,
    pub personal_best: Option<Run>,
}

impl GuildBoss {
    pub fn into_dto(self) -> GuildBossDto {
        GuildBossDto {
            boss_name: self.boss_name,
            personal_best: self.personal_best.map(Run::into_dto),
        }
    }
}

/// Whether `duration_ms` replaces the current best. Ties keep the existing run.
pub fn is_new_personal_best(current_best_ms: Option<i64>, duration_ms: i64) -> bool {
    match current_best_ms {
        None => true,
        Some(best) => duration_ms < best,
    }
}
