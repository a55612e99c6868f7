use crate::server::{data::rsn::RsnRepository, model::rsn::AddRsnParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
