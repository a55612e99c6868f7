use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDto {
    pub id: i32,
    pub boss_name: String,
    pub duration_ms: i64,
    pub recorded_at: DateTime<Utc>,
    #[serde(with = "crate::model::snowflake::vec")]
    pub team: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRunDto {
    pub boss_name: String,
    pub duration_ms: i64,
    #[serde(with = "crate::model::snowflake::vec")]
    pub user_ids: Vec<u64>,
}

/// Response to a run submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSubmissionDto {
    pub run: RunDto,
    /// Whether the run became the guild's best for the boss.
    pub personal_best: bool,
    /// Best run before this submission, if any.
    pub previous_best: Option<RunDto>,
}

/// Query string for run listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunListQuery {
    pub boss: Option<String>,
    pub user_id: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildBossDto {
    pub boss_name: String,
    pub personal_best: Option<RunDto>,
}
