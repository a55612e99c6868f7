//! Points settlement models and parameters.

use std::collections::{BTreeMap, HashMap};

use crate::{
    model::points::{PointSourceDto, PointsUpdateDto, UserBalanceDto},
    server::{
        error::validation::ValidationErrors,
        util::validate::{check_source_name, check_user_ids, MAX_REASON_LEN},
    },
};

/// Name of the point source credited when a competition is settled.
pub const EVENT_PARTICIPATION: &str = "event_participation";

/// A user's balance after settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct UserBalance {
    pub user_id: u64,
    pub points: i64,
}

impl UserBalance {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id as u64,
            points: entity.points,
        }
    }

    pub fn into_dto(self) -> UserBalanceDto {
        UserBalanceDto {
            user_id: self.user_id,
            points: self.points,
        }
    }
}

/// Outcome of a settlement: the per-occurrence amount and each credited user's new
/// balance, in the order the ids were first requested.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsUpdate {
    pub given: i64,
    pub users: Vec<UserBalance>,
}

impl PointsUpdate {
    pub fn into_dto(self) -> PointsUpdateDto {
        PointsUpdateDto {
            given: self.given,
            users: self.users.into_iter().map(UserBalance::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointSource {
    pub source: String,
    pub points: i64,
}

impl PointSource {
    pub fn from_entity(entity: entity::point_source::Model) -> Self {
        Self {
            source: entity.source,
            points: entity.points,
        }
    }

    pub fn into_dto(self) -> PointSourceDto {
        PointSourceDto {
            source: self.source,
            points: self.points,
        }
    }
}

/// Credit the value of a named point source to users.
#[derive(Debug, Clone)]
pub struct AwardPointsParams {
    pub guild_id: u64,
    pub user_ids: Vec<u64>,
    pub source: String,
}

impl AwardPointsParams {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_user_ids(&mut errors, &self.user_ids);
        check_source_name(&mut errors, &self.source);
        errors.into_result()
    }
}

/// Credit (or debit, when negative) an arbitrary amount to users.
#[derive(Debug, Clone)]
pub struct CustomPointsParams {
    pub guild_id: u64,
    pub user_ids: Vec<u64>,
    pub delta: i64,
    /// Logged with the settlement, never stored.
    pub reason: Option<String>,
}

impl CustomPointsParams {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_user_ids(&mut errors, &self.user_ids);
        errors.check(
            self.delta != 0,
            "points",
            self.delta,
            "non_zero",
            "points must not be zero",
        );
        if let Some(reason) = &self.reason {
            errors.check(
                reason.chars().count() <= MAX_REASON_LEN,
                "reason",
                reason,
                "max_length",
                format!("reason must be at most {} characters", MAX_REASON_LEN),
            );
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone)]
pub struct UpsertPointSourceParams {
    pub guild_id: u64,
    pub source: String,
    pub points: i64,
}

impl UpsertPointSourceParams {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_source_name(&mut errors, &self.source);
        errors.check(
            self.points >= 0,
            "points",
            self.points,
            "min",
            "point source value must not be negative",
        );
        errors.into_result()
    }
}

/// Groups user ids by how many times each appears.
///
/// Settlement issues one increment per group with `amount * multiplicity`, so a user
/// named twice is credited twice in a single statement. Ids within a group are sorted.
pub fn group_by_multiplicity(user_ids: &[u64]) -> BTreeMap<usize, Vec<u64>> {
    let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
    for id in user_ids {
        *counts.entry(*id).or_default() += 1;
    }

    let mut groups: BTreeMap<usize, Vec<u64>> = BTreeMap::new();
    for (id, count) in counts {
        groups.entry(count).or_default().push(id);
    }

    groups
}

/// Users whose balance cannot absorb the delta of their group, sorted.
///
/// Users without a balance are not listed here; they are reported as missing.
pub fn short_users(deltas: &[(i64, Vec<u64>)], balances: &HashMap<u64, i64>) -> Vec<u64> {
    let mut short: Vec<u64> = deltas
        .iter()
        .flat_map(|(delta, ids)| ids.iter().map(move |id| (*id, *delta)))
        .filter(|(id, delta)| {
            balances
                .get(id)
                .is_some_and(|points| points.checked_add(*delta).is_none_or(|after| after < 0))
        })
        .map(|(id, _)| id)
        .collect();

    short.sort_unstable();
    short
}

/// Distinct ids in first-occurrence order.
pub fn distinct_in_order(user_ids: &[u64]) -> Vec<u64> {
    let mut seen = std::collections::HashSet::new();
    user_ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
