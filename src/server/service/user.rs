//! User service for business logic.
//!
//! Registers guild members, looks them up with their aliases and builds the
//! leaderboard. Balances are never written here; see `PointsService`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{rsn::RsnRepository, user::UserRepository},
    error::AppError,
    model::user::{LeaderboardEntry, User, UserFilter},
    service::{already_exists, missing_parent},
};

/// Upper bound applied to leaderboard queries.
const MAX_LEADERBOARD_LIMIT: u64 = 1000;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user in a guild with a zero balance.
    ///
    /// # Returns
    /// - `Ok(User)` - Registered user
    /// - `Err(AppError::NotFound)` - Guild does not exist
    /// - `Err(AppError::Conflict)` - User already registered in the guild
    pub async fn register(&self, guild_id: u64, user_id: u64) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .create(guild_id, user_id)
            .await
            .map_err(|e| {
                if e.classification.is_foreign_key_violation() {
                    missing_parent(e, || format!("guild {} not found", guild_id))
                } else {
                    already_exists(e, || {
                        format!("user {} is already registered in guild {}", user_id, guild_id)
                    })
                }
            })?;

        tracing::info!(guild_id, user_id, "Registered user");

        Ok(User::from_entity(user, Vec::new()))
    }

    /// Gets a user with their RSN aliases.
    pub async fn get(&self, guild_id: u64, user_id: u64) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_id(guild_id, user_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "user {} not found in guild {}",
                user_id, guild_id
            )));
        };

        let rsns = RsnRepository::new(self.db)
            .get_by_user(guild_id, user_id)
            .await?;

        Ok(User::from_entity(user, rsns))
    }

    /// Removes a user together with their aliases, team rows and participations.
    pub async fn delete(&self, guild_id: u64, user_id: u64) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db)
            .delete(guild_id, user_id)
            .await?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "user {} not found in guild {}",
                user_id, guild_id
            )));
        }

        tracing::info!(guild_id, user_id, "Removed user");

        Ok(())
    }

    /// Lists users by points, highest first.
    pub async fn leaderboard(
        &self,
        guild_id: u64,
        mut filter: UserFilter,
    ) -> Result<Vec<LeaderboardEntry>, AppError> {
        filter.limit = Some(
            filter
                .limit
                .unwrap_or(MAX_LEADERBOARD_LIMIT)
                .min(MAX_LEADERBOARD_LIMIT),
        );

        let users = UserRepository::new(self.db)
            .filter(guild_id, &filter)
            .await?;

        Ok(users.into_iter().map(LeaderboardEntry::from_entity).collect())
    }
}
