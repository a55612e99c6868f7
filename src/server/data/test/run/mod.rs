use crate::server::{
    data::{run::RunRepository, team::TeamRepository},
    model::time::RunFilter,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
