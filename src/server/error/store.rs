//! Store error classification.
//!
//! Every error returned by the database layer is converted into a [`StoreFault`], which
//! carries a [`Classification`] derived from the driver's SQLSTATE code and severity.
//! Handlers decide on a response from the classification alone and never look at raw
//! driver errors.
//!
//! Postgres reports SQLSTATE codes directly. SQLite (used by the test suite) reports
//! extended result codes, which are normalized to the closest SQLSTATE before
//! classification so both backends share one taxonomy.

use axum::response::{IntoResponse, Response};
use sea_orm::{DbErr, RuntimeErr, SqlErr};
use sea_orm::sqlx::{
    self,
    postgres::{PgDatabaseError, PgSeverity},
};
use thiserror::Error;

use crate::server::error::{error_response, ErrorKind};

/// Sentinel for "query returned no rows" (SQLSTATE `no_data`).
pub const NO_ROWS: &str = "02000";
pub const NOT_NULL_VIOLATION: &str = "23502";
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
pub const UNIQUE_VIOLATION: &str = "23505";
pub const CHECK_VIOLATION: &str = "23514";
pub const SERIALIZATION_FAILURE: &str = "40001";
pub const DEADLOCK_DETECTED: &str = "40P01";
pub const CONNECTION_UNABLE: &str = "08001";
pub const CONNECTION_FAILURE: &str = "08006";
pub const ADMIN_SHUTDOWN: &str = "57P01";
pub const CRASH_SHUTDOWN: &str = "57P02";
pub const TOO_MANY_CONNECTIONS: &str = "53300";
/// Code used when the driver gave no usable code.
pub const UNKNOWN: &str = "UNKNOWN";

/// Severity reported with a store error, lowest first.
///
/// Everything below `Error` is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Notice,
    Debug,
    Log,
    Error,
    Fatal,
    Panic,
}

impl Severity {
    /// `FATAL` or `PANIC`: the backend session is gone.
    pub fn is_fatal(self) -> bool {
        self >= Severity::Fatal
    }

    pub fn is_informational(self) -> bool {
        self < Severity::Error
    }
}

impl From<PgSeverity> for Severity {
    fn from(severity: PgSeverity) -> Self {
        match severity {
            PgSeverity::Panic => Severity::Panic,
            PgSeverity::Fatal => Severity::Fatal,
            PgSeverity::Error => Severity::Error,
            PgSeverity::Warning => Severity::Warning,
            PgSeverity::Notice => Severity::Notice,
            PgSeverity::Debug => Severity::Debug,
            PgSeverity::Info => Severity::Info,
            PgSeverity::Log => Severity::Log,
        }
    }
}

/// Broad category of a store error, derived from the SQLSTATE class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    Connection,
    Constraint,
    DataException,
    TransactionConflict,
    Syntax,
    Resource,
    System,
    Configuration,
    NoData,
    Unknown,
}

/// Outcome of classifying a store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// SQLSTATE code (normalized for SQLite) or [`UNKNOWN`].
    pub code: String,
    pub severity: Severity,
    pub class: ErrorClass,
    /// Re-running the same operation may succeed.
    pub retryable: bool,
    /// The backend is healthy and the failure is specific to this request.
    pub recoverable: bool,
}

impl Classification {
    /// Classifies a SQLSTATE code reported with the given severity.
    ///
    /// The class and default flags come from the two-character code class. A handful of
    /// specific codes override the defaults, and a `FATAL`/`PANIC` severity always
    /// clears both flags.
    ///
    /// # Arguments
    /// - `code` - SQLSTATE code, or [`NO_ROWS`] for an empty result
    /// - `severity` - Severity reported by the backend
    ///
    /// # Returns
    /// - `Classification` - Code, severity, class and retry/recover flags
    pub fn from_code(code: &str, severity: Severity) -> Self {
        if code == NO_ROWS {
            return Self {
                code: NO_ROWS.to_string(),
                severity: Severity::Info,
                class: ErrorClass::NoData,
                retryable: false,
                recoverable: true,
            };
        }

        let (class, mut retryable, mut recoverable) = match code.get(..2) {
            Some("08") => (ErrorClass::Connection, true, false),
            Some("23") => (ErrorClass::Constraint, false, true),
            Some("22") => (ErrorClass::DataException, false, true),
            Some("40") => (ErrorClass::TransactionConflict, true, true),
            Some("42") => (ErrorClass::Syntax, false, false),
            Some("53") => (ErrorClass::Resource, true, false),
            Some("XX") => (ErrorClass::System, false, false),
            Some("F0") => (ErrorClass::Configuration, false, false),
            _ => (ErrorClass::Unknown, false, false),
        };

        if let Some((code_retryable, code_recoverable)) = code_override(code) {
            retryable = code_retryable;
            recoverable = code_recoverable;
        }

        if severity.is_fatal() {
            retryable = false;
            recoverable = false;
        }

        Self {
            code: code.to_string(),
            severity,
            class,
            retryable,
            recoverable,
        }
    }

    pub fn is_no_rows(&self) -> bool {
        self.class == ErrorClass::NoData
    }

    pub fn is_unique_violation(&self) -> bool {
        self.code == UNIQUE_VIOLATION
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        self.code == FOREIGN_KEY_VIOLATION
    }

}

/// (retryable, recoverable) for codes that differ from their class default.
fn code_override(code: &str) -> Option<(bool, bool)> {
    match code {
        SERIALIZATION_FAILURE | DEADLOCK_DETECTED => Some((true, true)),
        CONNECTION_FAILURE | ADMIN_SHUTDOWN | CRASH_SHUTDOWN | TOO_MANY_CONNECTIONS => {
            Some((true, false))
        }
        _ => None,
    }
}

/// Maps a driver-reported code to SQLSTATE.
///
/// Five-character codes are already SQLSTATE (Postgres). Anything else is treated as a
/// SQLite extended result code.
fn normalize_code(code: &str) -> &str {
    if code.len() == 5 {
        return code;
    }

    match code {
        // SQLITE_CONSTRAINT_UNIQUE, SQLITE_CONSTRAINT_PRIMARYKEY
        "2067" | "1555" => UNIQUE_VIOLATION,
        // SQLITE_CONSTRAINT_FOREIGNKEY
        "787" => FOREIGN_KEY_VIOLATION,
        // SQLITE_CONSTRAINT_NOTNULL
        "1299" => NOT_NULL_VIOLATION,
        // SQLITE_CONSTRAINT_CHECK
        "275" => CHECK_VIOLATION,
        // SQLITE_CONSTRAINT
        "19" => "23000",
        // SQLITE_BUSY and SQLITE_LOCKED variants
        "5" | "6" | "261" | "262" | "517" => SERIALIZATION_FAILURE,
        // SQLITE_FULL
        "13" => "53100",
        // SQLITE_CORRUPT
        "11" => "XX001",
        // SQLITE_CANTOPEN
        "14" => CONNECTION_FAILURE,
        // SQLITE_ERROR, raised for malformed statements
        "1" => "42601",
        _ => UNKNOWN,
    }
}

/// Classifies any error returned by SeaORM.
pub fn classify(err: &DbErr) -> Classification {
    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
            Classification::from_code(NO_ROWS, Severity::Info)
        }
        DbErr::ConnectionAcquire(_) => {
            Classification::from_code(CONNECTION_UNABLE, Severity::Error)
        }
        DbErr::Conn(RuntimeErr::SqlxError(e))
        | DbErr::Exec(RuntimeErr::SqlxError(e))
        | DbErr::Query(RuntimeErr::SqlxError(e)) => classify_sqlx(e),
        DbErr::Conn(_) => Classification::from_code(CONNECTION_FAILURE, Severity::Error),
        _ => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                Classification::from_code(UNIQUE_VIOLATION, Severity::Error)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                Classification::from_code(FOREIGN_KEY_VIOLATION, Severity::Error)
            }
            _ => Classification::from_code(UNKNOWN, Severity::Error),
        },
    }
}

fn classify_sqlx(err: &sqlx::Error) -> Classification {
    match err {
        sqlx::Error::Database(db_err) => {
            let severity = db_err
                .try_downcast_ref::<PgDatabaseError>()
                .map(|pg| Severity::from(pg.severity()))
                .unwrap_or(Severity::Error);

            match db_err.code() {
                Some(code) => Classification::from_code(normalize_code(&code), severity),
                None => Classification::from_code(UNKNOWN, severity),
            }
        }
        sqlx::Error::RowNotFound => Classification::from_code(NO_ROWS, Severity::Info),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            Classification::from_code(CONNECTION_UNABLE, Severity::Error)
        }
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
            Classification::from_code(CONNECTION_FAILURE, Severity::Error)
        }
        _ => Classification::from_code(UNKNOWN, Severity::Error),
    }
}

/// A classified error from the data layer.
#[derive(Error, Debug)]
#[error("store fault {} ({:?}): {source}", .classification.code, .classification.class)]
pub struct StoreFault {
    pub classification: Classification,
    pub source: DbErr,
}

/// Result type returned by every repository operation.
pub type StoreResult<T> = Result<T, StoreFault>;

impl From<DbErr> for StoreFault {
    fn from(source: DbErr) -> Self {
        let classification = classify(&source);
        Self {
            classification,
            source,
        }
    }
}

/// Converts a store fault into an HTTP response.
///
/// Fatal faults produce the "dead" response and unrecoverable faults produce "service
/// unavailable", both logged at error level. Recoverable faults fall back to a generic
/// domain mapping with a warn log; services map the cases they understand to more
/// specific errors before this point.
impl IntoResponse for StoreFault {
    fn into_response(self) -> Response {
        let c = &self.classification;

        if c.severity.is_fatal() {
            tracing::error!(code = %c.code, class = ?c.class, severity = ?c.severity, "Fatal store fault: {}", self.source);
            return error_response(ErrorKind::Dead, "Storage backend is unavailable");
        }

        if !c.recoverable {
            tracing::error!(code = %c.code, class = ?c.class, retryable = c.retryable, "Unrecoverable store fault: {}", self.source);
            return error_response(
                ErrorKind::ServiceUnavailable,
                "Service temporarily unavailable",
            );
        }

        if c.severity.is_informational() {
            tracing::debug!(code = %c.code, class = ?c.class, "Store fault: {}", self.source);
        } else {
            tracing::warn!(code = %c.code, class = ?c.class, "Store fault: {}", self.source);
        }

        if c.is_no_rows() {
            return error_response(ErrorKind::NotFound, "Resource not found");
        }

        match c.class {
            ErrorClass::Constraint => error_response(
                ErrorKind::Conflict,
                "Request conflicts with existing data",
            ),
            ErrorClass::DataException => {
                error_response(ErrorKind::MalformedRequest, "Request contains invalid data")
            }
            _ => error_response(
                ErrorKind::ServiceUnavailable,
                "Concurrent update detected, please retry",
            ),
        }
    }
}
