pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::cors::permissive_cors;
use crate::state::{AppState, SharedState};
use crate::store::SubmissionStore;

/// Build the router and its shared state. The store file is not touched here;
/// call [`SubmissionStore::ensure_exists`] before serving.
pub fn build_app(config: Config) -> (Router, SharedState) {
    let store = SubmissionStore::new(config.data_file.clone());
    let max_body_size = config.max_body_size;
    let expose_submissions = config.expose_submissions;
    let static_dir = config.static_dir.clone();

    if expose_submissions {
        tracing::warn!("GET /api/submissions is enabled and unauthenticated");
    }

    let state: SharedState = Arc::new(AppState { config, store });

    let router = routes::api_routes(expose_submissions);
    let router = match &static_dir {
        Some(dir) => {
            tracing::info!("Serving static files from {}", dir.display());
            router.merge(routes::site_routes(dir))
        }
        None => router.fallback(routes::not_found),
    };

    let app = router
        .method_not_allowed_fallback(routes::not_found)
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(axum::middleware::from_fn(permissive_cors))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    (app, state)
}
