//! Room service: create, update, delete against the in-memory plan.
//!
//! DESIGN
//! ======
//! Mutations validate the whole request first, then apply it under a single
//! write lock, bump the room's version, and mark it dirty for the persistence
//! task. Nothing here touches Postgres. Auto-placement runs under the same
//! lock that inserts the room, so two concurrent creates never pick the
//! same free cell.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::plan::catalog::{self, RoomTemplate};
use crate::plan::fixtures::{RoomFixtures, room_fixtures};
use crate::plan::geometry::{GeometryError, Rotation, footprint_size};
use crate::plan::placement::{Position, clamp_to_canvas, next_position};
use crate::state::{AppState, Opening, Room, now_ms};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    #[error("room not found: {0}")]
    NotFound(Uuid),
    #[error("Invalid room name")]
    InvalidName,
    #[error("Invalid room dimensions")]
    InvalidDimensions,
    #[error("Invalid room position")]
    InvalidPosition,
    #[error("Invalid room rotation")]
    InvalidRotation(#[from] GeometryError),
    #[error("Unknown room template: {0}")]
    UnknownTemplate(String),
}

/// Body of a create request. Template values fill whatever is left out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewRoom {
    pub name: Option<String>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub rotation: Option<f64>,
    pub template: Option<String>,
    /// Custom size in centimetres; both sides or neither.
    pub width_cm: Option<f64>,
    pub length_cm: Option<f64>,
}

/// Body of a partial update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomPatch {
    pub name: Option<String>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub rotation: Option<f64>,
    /// Free angle from a rotate handle, snapped to the nearest quarter turn.
    /// Ignored when `rotation` is present.
    pub handle_angle: Option<f64>,
}

/// Everything on the plan, in drawing order.
#[derive(Debug, Clone, Serialize)]
pub struct FloorPlan {
    pub rooms: Vec<Room>,
    pub doors: Vec<Opening>,
    pub windows: Vec<Opening>,
}

// =============================================================================
// VALIDATION
// =============================================================================

fn validate_name(name: &str) -> Result<String, RoomError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_control) {
        return Err(RoomError::InvalidName);
    }
    Ok(trimmed.to_owned())
}

fn validate_dimension(value: f64) -> Result<f64, RoomError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RoomError::InvalidDimensions)
    }
}

fn validate_coordinate(value: f64) -> Result<f64, RoomError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(RoomError::InvalidPosition)
    }
}

fn parse_rotation(degrees: Option<f64>) -> Result<Option<Rotation>, RoomError> {
    Ok(degrees.map(Rotation::from_degrees).transpose()?)
}

// =============================================================================
// READ
// =============================================================================

/// Snapshot of the whole plan.
pub async fn floorplan(state: &AppState) -> FloorPlan {
    let plan = state.plan.read().await;
    FloorPlan { rooms: plan.rooms.clone(), doors: plan.doors.clone(), windows: plan.windows.clone() }
}

/// Look up one room.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id.
pub async fn get_room(state: &AppState, id: Uuid) -> Result<Room, RoomError> {
    let plan = state.plan.read().await;
    plan.room(id).cloned().ok_or(RoomError::NotFound(id))
}

/// Door, window, and furniture geometry of one room in plan coordinates.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id.
pub async fn fixtures(state: &AppState, id: Uuid) -> Result<RoomFixtures, RoomError> {
    let plan = state.plan.read().await;
    let room = plan.room(id).ok_or(RoomError::NotFound(id))?;
    Ok(room_fixtures(&room.frame(), room.kind()))
}

/// Where a room of this size would be auto-placed right now.
///
/// # Errors
///
/// Returns `InvalidDimensions` for non-positive sizes and `InvalidRotation`
/// for angles off the quarter turns.
pub async fn preview_placement(
    state: &AppState,
    width: f64,
    length: f64,
    rotation: Option<f64>,
) -> Result<Position, RoomError> {
    let width = validate_dimension(width)?;
    let length = validate_dimension(length)?;
    let rotation = parse_rotation(rotation)?.unwrap_or_default();
    let (fw, fh) = footprint_size(width, length, rotation);

    let plan = state.plan.read().await;
    Ok(next_position(&plan.footprints_except(None), fw, fh, state.bounds))
}

// =============================================================================
// CREATE
// =============================================================================

/// Create a room, auto-placing it when no position is given.
///
/// # Errors
///
/// Returns a validation error for a bad name, size, position, rotation, or
/// template key. Giving only one of `top`/`left` is an invalid position.
pub async fn create_room(state: &AppState, new: NewRoom) -> Result<Room, RoomError> {
    let template: Option<&RoomTemplate> = match new.template.as_deref() {
        Some(key) => Some(catalog::template(key).ok_or_else(|| RoomError::UnknownTemplate(key.to_owned()))?),
        None => None,
    };

    let name = match (new.name.as_deref(), template) {
        (Some(name), _) => validate_name(name)?,
        (None, Some(t)) => t.name.to_owned(),
        (None, None) => return Err(RoomError::InvalidName),
    };
    let custom = match (new.width_cm, new.length_cm) {
        (Some(w), Some(l)) => Some(catalog::custom_dimensions_px(w, l).ok_or(RoomError::InvalidDimensions)?),
        (None, None) => None,
        _ => return Err(RoomError::InvalidDimensions),
    };
    let width = validate_dimension(
        new.width
            .or(custom.map(|(w, _)| w))
            .or(template.map(|t| t.width))
            .ok_or(RoomError::InvalidDimensions)?,
    )?;
    let length = validate_dimension(
        new.length
            .or(custom.map(|(_, l)| l))
            .or(template.map(|t| t.length))
            .ok_or(RoomError::InvalidDimensions)?,
    )?;
    let rotation = parse_rotation(new.rotation)?.unwrap_or_default();
    let explicit = match (new.top, new.left) {
        (Some(top), Some(left)) => Some(Position { top: validate_coordinate(top)?, left: validate_coordinate(left)? }),
        (None, None) => None,
        _ => return Err(RoomError::InvalidPosition),
    };

    let mut plan = state.plan.write().await;
    let position = match explicit {
        Some(position) => position,
        None => {
            let (fw, fh) = footprint_size(width, length, rotation);
            next_position(&plan.footprints_except(None), fw, fh, state.bounds)
        }
    };
    let created_at_ms = plan
        .rooms
        .iter()
        .map(|room| room.created_at_ms.saturating_add(1))
        .max()
        .map_or_else(now_ms, |next| next.max(now_ms()));

    let room = Room {
        id: Uuid::new_v4(),
        name,
        width,
        length,
        top: position.top,
        left: position.left,
        rotation,
        version: 1,
        created_at_ms,
    };
    plan.dirty.insert(room.id);
    plan.rooms.push(room.clone());

    info!(id = %room.id, name = %room.name, top = room.top, left = room.left, "room created");
    Ok(room)
}

// =============================================================================
// UPDATE
// =============================================================================

/// Apply a partial update. A new position is clamped to the canvas.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id or a validation error; a failed
/// request leaves the room untouched.
pub async fn update_room(state: &AppState, id: Uuid, patch: RoomPatch) -> Result<Room, RoomError> {
    let name = patch.name.as_deref().map(validate_name).transpose()?;
    let width = patch.width.map(validate_dimension).transpose()?;
    let length = patch.length.map(validate_dimension).transpose()?;
    let rotation = match parse_rotation(patch.rotation)? {
        Some(rotation) => Some(rotation),
        None => patch.handle_angle.map(Rotation::snap),
    };
    for coordinate in [patch.top, patch.left].into_iter().flatten() {
        if !coordinate.is_finite() {
            return Err(RoomError::InvalidPosition);
        }
    }

    let bounds = state.bounds;
    let mut plan = state.plan.write().await;
    let room = plan.room_mut(id).ok_or(RoomError::NotFound(id))?;

    if let Some(name) = name {
        room.name = name;
    }
    if let Some(width) = width {
        room.width = width;
    }
    if let Some(length) = length {
        room.length = length;
    }
    if let Some(rotation) = rotation {
        room.rotation = rotation;
    }
    if patch.top.is_some() || patch.left.is_some() {
        let target = Position { top: patch.top.unwrap_or(room.top), left: patch.left.unwrap_or(room.left) };
        let (fw, fh) = footprint_size(room.width, room.length, room.rotation);
        let clamped = clamp_to_canvas(fw, fh, target, bounds);
        room.top = clamped.top;
        room.left = clamped.left;
    }
    room.version += 1;

    let updated = room.clone();
    plan.dirty.insert(id);
    Ok(updated)
}

// =============================================================================
// DELETE
// =============================================================================

/// Remove a room and leave a tombstone for the persistence task.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id.
pub async fn delete_room(state: &AppState, id: Uuid) -> Result<(), RoomError> {
    let mut plan = state.plan.write().await;
    let index = plan
        .rooms
        .iter()
        .position(|room| room.id == id)
        .ok_or(RoomError::NotFound(id))?;

    let removed = plan.rooms.remove(index);
    plan.dirty.remove(&id);
    plan.deleted.insert(id);

    info!(%id, name = %removed.name, "room deleted");
    Ok(())
}

#[cfg(test)]
#[path = "room_test.rs"]
mod tests;
