use chrono::Utc;

use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;

use super::validate;

pub const ACCEPTED_MESSAGE: &str =
    "¡Solicitud enviada con éxito! Nos pondremos en contacto contigo pronto.";

/// Validate a decoded payload and append it to the store.
/// Nothing is written unless validation passes.
pub async fn run(state: &SharedState, raw_data: serde_json::Value) -> Result<(), AppError> {
    let form = validate::validate(&raw_data, state.config.validation)
        .inspect_err(|e| tracing::debug!("Rejected submission: {e}"))?;

    let submission = Submission::new(form, Utc::now());
    let total = state.store.append(&submission).await?;

    tracing::info!(submission_id = %submission.id, total, "New submission stored");

    Ok(())
}
