//! Whole-plan routes: listing, placement preview, templates, and export.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use tracing::{error, info};

use crate::plan::catalog::{RoomTemplate, TEMPLATES};
use crate::plan::export::{ExportOptions, render_svg};
use crate::plan::placement::Position;
use crate::routes::error::ApiError;
use crate::services::room::{self, FloorPlan};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlacementQuery {
    pub width: f64,
    pub length: f64,
    pub rotation: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub scale: Option<f32>,
    pub furniture: Option<bool>,
}

impl ExportQuery {
    fn options(&self) -> ExportOptions {
        let defaults = ExportOptions::default();
        ExportOptions {
            scale: self.scale.unwrap_or(defaults.scale),
            furniture: self.furniture.unwrap_or(defaults.furniture),
        }
    }
}

/// `GET /api/floorplan`: rooms, doors, and windows.
pub async fn get_floorplan(State(state): State<AppState>) -> Json<FloorPlan> {
    Json(room::floorplan(&state).await)
}

/// `GET /api/placement?width=&length=`: where a new room would land.
pub async fn placement(
    State(state): State<AppState>,
    query: Result<Query<PlacementQuery>, QueryRejection>,
) -> Result<Json<Position>, ApiError> {
    let Query(query) = query?;
    let position = room::preview_placement(&state, query.width, query.length, query.rotation).await?;
    Ok(Json(position))
}

/// `GET /api/templates`: built-in room presets.
pub async fn templates() -> Json<&'static [RoomTemplate]> {
    Json(&TEMPLATES[..])
}

/// `GET /api/floorplan/export.png`: rasterized plan download.
pub async fn export_png(
    State(state): State<AppState>,
    query: Result<Query<ExportQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let options = query.options();
    let rooms = state.plan.read().await.rooms.clone();
    let renderer = state.renderer.clone();
    let count = rooms.len();

    // Rasterizing is CPU-bound; keep it off the async workers.
    let png = tokio::task::spawn_blocking(move || renderer.render_png(&rooms, &options))
        .await
        .map_err(|e| {
            error!(error = %e, "export task failed");
            ApiError::internal("Failed to export floor plan")
        })??;

    info!(rooms = count, bytes = png.len(), scale = options.scale, "exported floor plan png");
    Ok((
        [(CONTENT_TYPE, "image/png"), (CONTENT_DISPOSITION, "attachment; filename=\"floorplan.png\"")],
        png,
    )
        .into_response())
}

/// `GET /api/floorplan/export.svg`: vector plan download.
pub async fn export_svg(
    State(state): State<AppState>,
    query: Result<Query<ExportQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let svg = {
        let plan = state.plan.read().await;
        render_svg(&plan.rooms, &query.options())
    };

    Ok((
        [
            (CONTENT_TYPE, "image/svg+xml; charset=utf-8"),
            (CONTENT_DISPOSITION, "attachment; filename=\"floorplan.svg\""),
        ],
        svg,
    )
        .into_response())
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
