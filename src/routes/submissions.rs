use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::SharedState;

/// Full store contents in submission order, exactly as stored. Unauthenticated,
/// so it is only routed when explicitly enabled.
pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<serde_json::Value>>, AppError> {
    let submissions = state.store.load().await?;
    Ok(Json(submissions))
}
