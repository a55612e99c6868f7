use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildDto {
    #[serde(with = "crate::model::snowflake")]
    pub guild_id: u64,
    pub multiplier: f64,
    #[serde(with = "crate::model::snowflake::option", default)]
    pub pb_channel_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGuildDto {
    #[serde(with = "crate::model::snowflake")]
    pub guild_id: u64,
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    #[serde(with = "crate::model::snowflake::option", default)]
    pub pb_channel_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGuildDto {
    pub multiplier: f64,
    #[serde(with = "crate::model::snowflake::option", default)]
    pub pb_channel_id: Option<u64>,
}

fn default_multiplier() -> f64 {
    1.0
}
