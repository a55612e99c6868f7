use crate::server::{
    data::guild::GuildRepository,
    model::guild::{CreateGuildParams, UpdateGuildParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;
