use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::{parser, pipeline};

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    })?;

    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let raw_data = parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?;

    pipeline::run(&state, raw_data).await?;

    Ok(Json(json!({
        "success": true,
        "message": pipeline::ACCEPTED_MESSAGE,
    })))
}
