//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! them to the service layer, which converts them to domain models.
//!
//! Every repository is generic over [`sea_orm::ConnectionTrait`] so the same code runs
//! against the connection pool or an open `DatabaseTransaction`. Repositories never begin
//! or commit transactions; multi-statement operations are wrapped by the service layer.
//! All operations return [`StoreResult`](crate::server::error::store::StoreResult), so
//! failures arrive already classified.

pub mod event;
pub mod guild;
pub mod guild_boss;
pub mod participation;
pub mod point_source;
pub mod rsn;
pub mod run;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
