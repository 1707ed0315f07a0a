pub mod ingest;
pub mod status;
pub mod submissions;

use std::path::Path;

use axum::handler::HandlerWithoutStateExt;
use axum::routing::{get, get_service, post};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::AppError;
use crate::state::SharedState;

pub fn api_routes(expose_submissions: bool) -> Router<SharedState> {
    let router = Router::new()
        .route("/api/status", get(status::status))
        .route("/api/submit", post(ingest::submit));

    if expose_submissions {
        router.route("/api/submissions", get(submissions::list))
    } else {
        router
    }
}

/// The public site: `/contacto` serves the form page and every other path is
/// looked up under `dir`. Misses fall through to the JSON 404.
pub fn site_routes(dir: &Path) -> Router<SharedState> {
    let files = ServeDir::new(dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .route("/contacto", get_service(ServeFile::new(dir.join("contacto.html"))))
        .fallback_service(files)
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
