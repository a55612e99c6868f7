//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! guild entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types own their input validation, which services run before touching the
//! store.

pub mod competition;
pub mod event;
pub mod guild;
pub mod points;
pub mod rsn;
pub mod time;
pub mod user;
