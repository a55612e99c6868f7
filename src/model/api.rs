use serde::{Deserialize, Serialize};

/// Body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// Stable application error code, e.g. `1004` for not-found.
    pub code: u16,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldErrorDto>>,
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldErrorDto {
    pub field: String,
    pub value: String,
    pub rule: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}
