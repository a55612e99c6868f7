//! HTTP handlers.
//!
//! Handlers convert path, query and body input into service params, call one service
//! and convert the result back to a DTO. They hold no business logic.

pub mod competition;
pub mod event;
pub mod guild;
pub mod health;
pub mod point_source;
pub mod points;
pub mod rsn;
pub mod time;
pub mod user;
