use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsnDto {
    pub rsn: String,
    #[serde(with = "crate::model::snowflake")]
    pub user_id: u64,
    pub wom_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRsnDto {
    pub rsn: String,
    #[serde(default)]
    pub wom_id: Option<i64>,
}
