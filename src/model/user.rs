use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(with = "crate::model::snowflake")]
    pub guild_id: u64,
    #[serde(with = "crate::model::snowflake")]
    pub user_id: u64,
    pub points: i64,
    pub rsns: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserDto {
    #[serde(with = "crate::model::snowflake")]
    pub user_id: u64,
}

/// Query string for the leaderboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    pub min_points: Option<i64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntryDto {
    #[serde(with = "crate::model::snowflake")]
    pub user_id: u64,
    pub points: i64,
}
