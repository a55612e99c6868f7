//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a guild with the given number of users, each holding `points`.
///
/// # Arguments
/// - `db` - Database connection
/// - `users` - Number of users to register in the guild
/// - `points` - Starting balance for every user
///
/// # Returns
/// - `Ok((guild, users))` - The guild and its users in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_with_users(
    db: &DatabaseConnection,
    users: usize,
    points: i64,
) -> Result<(entity::guild::Model, Vec<entity::user::Model>), DbErr> {
    let guild = crate::factory::guild::create_guild(db).await?;

    let mut created = Vec::with_capacity(users);
    for _ in 0..users {
        created.push(
            crate::factory::user::UserFactory::new(db, guild.guild_id)
                .points(points)
                .build()
                .await?,
        );
    }

    Ok((guild, created))
}
