use crate::server::data::guild_boss::GuildBossRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod set_personal_best;
mod track;
