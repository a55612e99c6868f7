use sea_orm::EntityTrait;

use crate::server::{
    error::AppError,
    model::event::{CreateEventParams, Participation},
    service::event::EventService,
};
use test_utils::{builder::TestBuilder, factory};
