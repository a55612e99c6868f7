//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating guild members with customizable fields.
///
/// Defaults:
/// - user_id: auto-incremented unique id
/// - points: `0`
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db, guild.guild_id)
///     .user_id(42)
///     .points(100)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    points: i64,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            user_id: next_id() as i64,
            points: 0,
        }
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            points: ActiveValue::Set(self.points),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with a zero balance in the given guild.
pub async fn create_user(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, guild_id).build().await
}

/// Creates a user with a starting balance in the given guild.
pub async fn create_user_with_points(
    db: &DatabaseConnection,
    guild_id: i64,
    points: i64,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, guild_id).points(points).build().await
}
