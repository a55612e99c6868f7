use serde::{Deserialize, Serialize};

use crate::model::points::UserBalanceDto;

/// Result of settling a Wise Old Man competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionSettlementDto {
    pub competition_id: u64,
    pub title: String,
    pub cutoff: f64,
    /// Points credited to each qualifying user.
    pub given: i64,
    pub users: Vec<UserBalanceDto>,
}
