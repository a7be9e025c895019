//! Backend-for-frontend for the expense tracker web app.
//!
//! Relays bill CRUD calls to the accounts service, orchestrates the
//! parse-receipt → create-bill flow against the receipt parser service,
//! and serves the static web client.

use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub mod api;
pub mod services;
pub mod state;

use api::create_api_router;
use state::AppState;

/// Uploaded receipt images are capped at 5 MiB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Whole-request body limit, slightly above the per-file cap so the
/// multipart handler's own size check decides the response.
const BODY_LIMIT_BYTES: usize = MAX_IMAGE_BYTES + 64 * 1024;

pub fn create_app_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(create_api_router())
        // Web client: static files, no build step
        .fallback_service(ServeDir::new("static"))
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
