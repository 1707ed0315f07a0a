use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::json;

pub async fn status() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
