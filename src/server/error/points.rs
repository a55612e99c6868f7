use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::{error_response, ErrorKind};

/// Points settlement failures that carry domain meaning.
///
/// Any of these aborts the settlement before its transaction commits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PointsError {
    /// The guild has no point source with this name.
    #[error("point source '{name}' not found")]
    SourceNotFound { guild_id: u64, name: String },

    /// Some requested users are not registered in the guild.
    #[error("users not found in guild: {}", format_ids(.missing))]
    UsersNotFound { guild_id: u64, missing: Vec<u64> },

    /// A debit would take these users below zero.
    #[error("insufficient points for users: {}", format_ids(.users))]
    InsufficientPoints { guild_id: u64, users: Vec<u64> },
}

fn format_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl IntoResponse for PointsError {
    fn into_response(self) -> Response {
        tracing::warn!("Settlement rejected: {}", self);

        let kind = match self {
            Self::SourceNotFound { .. } | Self::UsersNotFound { .. } => ErrorKind::NotFound,
            Self::InsufficientPoints { .. } => ErrorKind::Conflict,
        };

        error_response(kind, self.to_string())
    }
}
