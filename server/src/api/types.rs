//! Shared API types
//!
//! Response envelopes and error mapping used by every endpoint. Successful
//! responses carry `{success: true, message, data}`, failures carry
//! `{success: false, code, message}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::JobServiceError;

/// Parse an optional integer query parameter. Empty values count as unset.
pub fn parse_salary_param(name: &str, value: &Option<String>) -> Result<Option<i64>, ApiError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<i64>().map(Some).map_err(|_| {
            ApiError::bad_request(
                "INVALID_NUMBER",
                format!("Invalid value '{}' for {}: expected an integer", raw, name),
            )
        }),
    }
}

/// Failure envelope body
pub(crate) fn error_body(code: &str, message: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": false,
        "code": code,
        "message": message
    }))
}

/// Standard API error response
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn from_data(e: crate::data::DataError) -> Self {
        tracing::error!(error = %e, backend = e.backend(), "Data error");
        Self::Internal {
            message: "Database operation failed".to_string(),
        }
    }
}

impl From<JobServiceError> for ApiError {
    fn from(e: JobServiceError) -> Self {
        match e {
            JobServiceError::Validation(err) => {
                tracing::debug!(code = err.code(), error = %err, "Rejected job filters");
                Self::bad_request(err.code(), err.to_string())
            }
            JobServiceError::Storage(err) => Self::from_data(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            Self::NotFound { code, message } => (StatusCode::NOT_FOUND, code, message),
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL".to_string(),
                message,
            ),
        };
        (status, error_body(&code, &message)).into_response()
    }
}

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}
