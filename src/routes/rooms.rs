//! Room CRUD routes.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::plan::fixtures::RoomFixtures;
use crate::routes::error::ApiError;
use crate::services::room::{self, NewRoom, RoomPatch};
use crate::state::{AppState, Room};

/// `POST /api/rooms`: create a room; auto-placed when no position is given.
pub async fn create_room(
    State(state): State<AppState>,
    body: Result<Json<NewRoom>, JsonRejection>,
) -> Result<(StatusCode, Json<Room>), ApiError> {
    let Json(body) = body?;
    let created = room::create_room(&state, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/rooms/:id`: fetch one room.
pub async fn get_room(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Room>, ApiError> {
    let Path(id) = id?;
    Ok(Json(room::get_room(&state, id).await?))
}

/// `PATCH /api/rooms/:id`: partial update (move, resize, rename, rotate).
pub async fn update_room(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<RoomPatch>, JsonRejection>,
) -> Result<Json<Room>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    Ok(Json(room::update_room(&state, id, patch).await?))
}

/// `DELETE /api/rooms/:id`: remove a room.
pub async fn delete_room(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Path(id) = id?;
    room::delete_room(&state, id).await?;
    Ok(Json(serde_json::json!({ "message": "Room deleted successfully" })))
}

/// `GET /api/rooms/:id/fixtures`: door, windows, and furniture in plan coordinates.
pub async fn room_fixtures(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<RoomFixtures>, ApiError> {
    let Path(id) = id?;
    Ok(Json(room::fixtures(&state, id).await?))
}

#[cfg(test)]
#[path = "rooms_test.rs"]
mod tests;
