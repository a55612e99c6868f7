//! SeaORM entity models for the guild tracker schema.
//!
//! Every table is scoped by `guild_id`. Discord snowflakes are stored as `i64`.

pub mod prelude;

pub mod event;
pub mod guild;
pub mod guild_boss;
pub mod participation;
pub mod point_source;
pub mod rsn;
pub mod run;
pub mod team;
pub mod user;
