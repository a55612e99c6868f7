use crate::server::{data::user::UserRepository, model::user::UserFilter};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_points;
