use crate::server::{
    data::{event::EventRepository, participation::ParticipationRepository},
    model::event::Participation,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
