use crate::server::{
    data::user::UserRepository,
    error::{points::PointsError, AppError},
    model::points::{AwardPointsParams, CustomPointsParams},
    service::points::PointsService,
};
use test_utils::{builder::TestBuilder, factory};

mod award;
mod award_custom;

/// Reads a user's balance straight from the store.
async fn balance(db: &sea_orm::DatabaseConnection, guild_id: i64, user_id: i64) -> i64 {
    UserRepository::new(db)
        .find_by_id(guild_id as u64, user_id as u64)
        .await
        .unwrap()
        .unwrap()
        .points
}
