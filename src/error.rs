use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::store::StoreError;

/// Shown to clients for any failure whose details stay server-side.
pub const INTERNAL_MESSAGE: &str = "Error al procesar la solicitud";

#[derive(Debug)]
pub enum AppError {
    Validation { field: &'static str, message: String },
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge(String),
    Store(StoreError),
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { field, message } => {
                write!(f, "Validation failed on {field}: {message}")
            }
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload Too Large: {msg}"),
            AppError::Store(err) => write!(f, "Store Error: {err}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, field, message) = match self {
            AppError::Validation { field, message } => {
                (StatusCode::BAD_REQUEST, Some(field), message)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, None, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, None, msg),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, None, msg),
            AppError::Store(err) => {
                tracing::error!("Submission store error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, None, INTERNAL_MESSAGE.to_string())
            }
        };

        let body = match field {
            Some(field) => json!({ "success": false, "field": field, "message": message }),
            None => json!({ "success": false, "message": message }),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}
