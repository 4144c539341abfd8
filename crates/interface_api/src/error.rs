//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::{PortError, Translator};
use domain_receipt::ReceiptError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A ledger edit refused by the editor
    #[error("Edit rejected: {message}")]
    Rejected { code: String, message: String },
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Translation key of a rejected edit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    /// Maps a ledger error, translating its message
    ///
    /// Rejected edits become 422 with the translation key as `code`; unknown
    /// months and lines become 404.
    pub fn from_receipt(err: ReceiptError, translator: &dyn Translator) -> Self {
        let message = translator.translate(err.translation_key());
        match err {
            ReceiptError::NegativeAmount(_)
            | ReceiptError::UnknownField(_)
            | ReceiptError::AmountOutOfRange(_) => ApiError::Rejected {
                code: err.translation_key().to_string(),
                message,
            },
            ReceiptError::MonthOutOfRange(_) | ReceiptError::LineOutOfRange { .. } => {
                ApiError::NotFound(message)
            }
            ReceiptError::InvalidLeaseDate(_) | ReceiptError::PriceNotFound(_) => {
                ApiError::Validation(format!("{}: {}", message, err))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, code) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", "Unauthorized".to_string(), None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg, None),
            ApiError::Rejected { code, message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "edit_rejected", message, Some(code))
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            code,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::Validation { message, .. } => ApiError::Validation(message),
            PortError::Conflict { message } => ApiError::Conflict(message),
            PortError::Connection { .. } | PortError::Internal { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}
