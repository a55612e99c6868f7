//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone:
//! - `DatabaseConnection` is a pool (clones share it)
//! - `WomClient` wraps a `reqwest::Client`, which uses an `Arc` internally
//! - the token is behind an `Arc`

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::wom::WomClient;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for the Wise Old Man API, used by competition settlement.
    pub wom: WomClient,

    /// Token expected in the `Authorization: Bearer` header.
    pub api_token: Arc<str>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, wom: WomClient, api_token: impl Into<Arc<str>>) -> Self {
        Self {
            db,
            wom,
            api_token: api_token.into(),
        }
    }
}
