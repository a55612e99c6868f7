use crate::server::{
    error::AppError,
    model::{guild::CreateGuildParams, rsn::AddRsnParams},
    service::{guild::GuildService, rsn::RsnService, user::UserService},
};
use test_utils::{builder::TestBuilder, factory};

mod guild;
mod rsn;
