use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBalanceDto {
    #[serde(with = "crate::model::snowflake")]
    pub user_id: u64,
    pub points: i64,
}

/// Result of a points settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsUpdateDto {
    /// Amount credited per occurrence of a user id.
    pub given: i64,
    pub users: Vec<UserBalanceDto>,
}

/// Optional body for a custom points update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomPointsDto {
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSourceDto {
    pub source: String,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsertPointSourceDto {
    pub points: i64,
}
