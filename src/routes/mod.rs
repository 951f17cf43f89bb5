//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API under `/api` and serves the browser
//! client's static files as the fallback. CORS is open because the editor
//! may be served from a different origin during development.

pub mod error;
pub mod plan;
pub mod rooms;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes without the static fallback.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/floorplan", get(plan::get_floorplan))
        .route("/api/floorplan/export.png", get(plan::export_png))
        .route("/api/floorplan/export.svg", get(plan::export_svg))
        .route("/api/placement", get(plan::placement))
        .route("/api/templates", get(plan::templates))
        .route("/api/rooms", post(rooms::create_room))
        .route(
            "/api/rooms/{id}",
            get(rooms::get_room)
                .patch(rooms::update_room)
                .delete(rooms::delete_room),
        )
        .route("/api/rooms/{id}/fixtures", get(rooms::room_fixtures))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API, static client, compression, and request tracing.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let static_files = ServeDir::new(static_dir).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
