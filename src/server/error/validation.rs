//! Request validation errors.
//!
//! Validation runs on parsed request input before any store call. All violations are
//! collected so the client sees every rejected field in one response.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::{model::api::FieldErrorDto, server::error::validation_response};

/// One rejected input field and the rule it broke.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub value: String,
    pub rule: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn into_dto(self) -> FieldErrorDto {
        FieldErrorDto {
            field: self.field,
            value: self.value,
            rule: self.rule.to_string(),
            message: self.message,
        }
    }
}

/// Collected validation failures for a request.
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("validation failed for {} field(s)", .violations.len())]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation on `field` unless `ok` holds.
    pub fn check(
        &mut self,
        ok: bool,
        field: &str,
        value: impl ToString,
        rule: &'static str,
        message: impl Into<String>,
    ) -> &mut Self {
        if !ok {
            self.violations.push(FieldViolation {
                field: field.to_string(),
                value: value.to_string(),
                rule,
                message: message.into(),
            });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[cfg(test)]
    pub fn has(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {:?}", self.violations);

        let message = self.to_string();
        let fields = self.violations.into_iter().map(FieldViolation::into_dto).collect();

        validation_response(message, fields)
    }
}
