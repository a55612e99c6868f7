use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipationDto {
    #[serde(with = "crate::model::snowflake")]
    pub user_id: u64,
    pub placement: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventDto {
    pub name: String,
    #[serde(default)]
    pub wom_competition_id: Option<u64>,
    #[serde(default)]
    pub participations: Vec<ParticipationDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDto {
    pub id: i32,
    pub name: String,
    pub wom_competition_id: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub participations: Vec<ParticipationDto>,
}
