//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Running parameter validation before any store access
//! - **Orchestration**: Coordinating repository calls and the Wise Old Man client
//! - **Domain Models**: Converting entity models into domain models
//! - **Transaction Management**: Opening, committing and dropping transactions around
//!   multi-step operations
//!
//! A transaction that is dropped without `commit()` rolls back. Services rely on this:
//! returning early with `?` from inside a transaction undoes everything it did.

pub mod competition;
pub mod event;
pub mod guild;
pub mod point_source;
pub mod points;
pub mod rsn;
pub mod time;
pub mod user;

#[cfg(test)]
mod test;

use crate::server::error::{store::StoreFault, AppError};

/// Turns a foreign key violation into a not-found error, leaving other faults as is.
///
/// Inserts that reference a guild or user fail this way when the parent is missing.
pub(crate) fn missing_parent(fault: StoreFault, message: impl FnOnce() -> String) -> AppError {
    if fault.classification.is_foreign_key_violation() {
        AppError::NotFound(message())
    } else {
        fault.into()
    }
}

/// Turns a unique violation into a conflict error, leaving other faults as is.
pub(crate) fn already_exists(fault: StoreFault, message: impl FnOnce() -> String) -> AppError {
    if fault.classification.is_unique_violation() {
        AppError::Conflict(message())
    } else {
        fault.into()
    }
}

pub(crate) fn format_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
