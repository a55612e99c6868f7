use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::{error_response, ErrorKind};

/// Competition settlement failures.
///
/// The first three variants come from the Wise Old Man request and are raised before
/// any store access. The rest mean there was nobody to credit.
#[derive(Error, Debug)]
pub enum CompetitionError {
    #[error("failed to reach Wise Old Man: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Wise Old Man returned {status} for competition {competition_id}")]
    Status {
        competition_id: u64,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode competition {competition_id}: {source}")]
    Decode {
        competition_id: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("competition {0} has no participants")]
    NoParticipants(u64),

    #[error("no participant of competition {competition_id} gained at least {cutoff}")]
    NoneQualified { competition_id: u64, cutoff: f64 },

    #[error("no qualifying participant of competition {0} matches a registered RSN")]
    NoneResolved(u64),
}

impl IntoResponse for CompetitionError {
    fn into_response(self) -> Response {
        match self {
            Self::Request(_) | Self::Status { .. } | Self::Decode { .. } => {
                tracing::error!("Competition fetch failed: {}", self);
                error_response(
                    ErrorKind::ServiceUnavailable,
                    "Wise Old Man is currently unavailable",
                )
            }
            Self::NoParticipants(_) => {
                tracing::warn!("{}", self);
                error_response(ErrorKind::NotFound, self.to_string())
            }
            Self::NoneQualified { .. } => {
                tracing::info!("{}", self);
                error_response(ErrorKind::NotFound, self.to_string())
            }
            Self::NoneResolved(_) => {
                tracing::warn!("{}", self);
                error_response(ErrorKind::NotFound, self.to_string())
            }
        }
    }
}
