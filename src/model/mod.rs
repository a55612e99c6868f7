//! Request and response bodies exchanged over the HTTP API.
//!
//! Discord snowflake ids are sent as JSON strings to survive clients that parse numbers
//! as doubles; see [`snowflake`].

pub mod api;
pub mod competition;
pub mod event;
pub mod guild;
pub mod points;
pub mod rsn;
pub mod snowflake;
pub mod time;
pub mod user;
