//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` for
//! automatic error handling in API endpoints.
//!
//! Every error response carries a stable numeric code alongside its HTTP status so
//! clients can branch on the code without parsing messages. See [`ErrorKind`].

pub mod competition;
pub mod config;
pub mod points;
pub mod store;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, FieldErrorDto},
    server::error::{
        competition::CompetitionError, config::ConfigError, points::PointsError,
        store::StoreFault, validation::ValidationErrors,
    },
};

/// User-visible error categories with their HTTP status and stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedRequest,
    ValidationFailed,
    Unauthorized,
    NotFound,
    Conflict,
    RateLimited,
    ServiceUnavailable,
    /// The backend is in a state the request cannot recover from.
    Dead,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::MalformedRequest => StatusCode::BAD_REQUEST,
            Self::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Dead => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(self) -> u16 {
        match self {
            Self::MalformedRequest => 1000,
            Self::ValidationFailed => 1001,
            Self::Unauthorized => 1002,
            Self::NotFound => 1004,
            Self::Conflict => 1009,
            Self::RateLimited => 1029,
            Self::ServiceUnavailable => 1503,
            Self::Dead => 1500,
        }
    }
}

/// Builds an error response of the given kind with the standard body.
pub fn error_response(kind: ErrorKind, message: impl Into<String>) -> Response {
    (
        kind.status(),
        Json(ErrorDto {
            code: kind.code(),
            error: message.into(),
            fields: None,
        }),
    )
        .into_response()
}

/// Builds a validation-failed response listing every rejected field.
pub fn validation_response(message: impl Into<String>, fields: Vec<FieldErrorDto>) -> Response {
    let kind = ErrorKind::ValidationFailed;
    (
        kind.status(),
        Json(ErrorDto {
            code: kind.code(),
            error: message.into(),
            fields: Some(fields),
        }),
    )
        .into_response()
}

/// Top-level application error type.
///
/// Aggregates all error types that can occur while serving a request. Domain errors
/// (`StoreFault`, `PointsError`, `CompetitionError`, `ValidationErrors`) handle their own
/// response mapping, while the string variants map directly to an [`ErrorKind`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Classified database error.
    ///
    /// Delegates to `StoreFault::into_response()`, which chooses the response from the
    /// fault's classification.
    #[error(transparent)]
    StoreErr(#[from] StoreFault),

    /// Request input failed validation. Results in 422 with the rejected fields.
    #[error(transparent)]
    ValidationErr(#[from] ValidationErrors),

    /// Points settlement error.
    #[error(transparent)]
    PointsErr(#[from] PointsError),

    /// Competition settlement error, including failures talking to Wise Old Man.
    #[error(transparent)]
    CompetitionErr(#[from] CompetitionError),

    /// Missing or incorrect bearer token. Results in 401.
    #[error("{0}")]
    Unauthorized(String),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Request conflicts with existing state. Results in 409 with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Request could not be parsed. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Classifies raw SeaORM errors on their way into `AppError`.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::StoreErr(StoreFault::from(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 401 Unauthorized - For `Unauthorized`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For `ConfigErr` and `InternalError`
/// - Variable - For domain errors, delegated to their own `into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::StoreErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::PointsErr(err) => err.into_response(),
            Self::CompetitionErr(err) => err.into_response(),
            Self::Unauthorized(msg) => error_response(ErrorKind::Unauthorized, msg),
            Self::NotFound(msg) => error_response(ErrorKind::NotFound, msg),
            Self::Conflict(msg) => error_response(ErrorKind::Conflict, msg),
            Self::BadRequest(msg) => error_response(ErrorKind::MalformedRequest, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(ErrorKind::Dead, "Internal server error")
            }
            err @ Self::ConfigErr(_) => {
                tracing::error!("{}", err);
                error_response(ErrorKind::Dead, "Internal server error")
            }
        }
    }
}
