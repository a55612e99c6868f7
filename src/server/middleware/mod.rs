//! Request guards applied in front of the handlers.

pub mod auth;
pub mod rate_limit;
