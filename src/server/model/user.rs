//! Guild member domain models and parameters.
//!
//! A user is a Discord member registered in one guild. The same Discord account
//! registered in two guilds is two users with independent balances.

use chrono::{DateTime, Utc};

use crate::model::user::{LeaderboardEntryDto, UserDto};

/// A registered guild member with their RSN aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub guild_id: u64,
    pub user_id: u64,
    pub points: i64,
    pub rsns: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The user row
    /// - `rsns` - Alias rows belonging to the user
    ///
    /// # Returns
    /// - `User` - Domain model with aliases sorted by name
    pub fn from_entity(entity: entity::user::Model, rsns: Vec<entity::rsn::Model>) -> Self {
        let mut rsns: Vec<String> = rsns.into_iter().map(|r| r.rsn).collect();
        rsns.sort();

        Self {
            guild_id: entity.guild_id as u64,
            user_id: entity.user_id as u64,
            points: entity.points,
            rsns,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            guild_id: self.guild_id,
            user_id: self.user_id,
            points: self.points,
            rsns: self.rsns,
            created_at: self.created_at,
        }
    }
}

/// Leaderboard filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// Only users with at least this many points.
    pub min_points: Option<i64>,
    /// Maximum number of users returned.
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub user_id: u64,
    pub points: i64,
}

impl LeaderboardEntry {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id as u64,
            points: entity.points,
        }
    }

    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            user_id: self.user_id,
            points: self.points,
        }
    }
}
