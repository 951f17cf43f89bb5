//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the database pool, the live floor plan, and the export renderer.
//! The plan is hydrated from Postgres at startup and mutated in memory;
//! the persistence task writes dirty rooms and tombstones back.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::plan::catalog::RoomKind;
use crate::plan::export::PlanRenderer;
use crate::plan::geometry::{Rect, RoomFrame, Rotation, footprint};
use crate::plan::placement::CanvasBounds;

// =============================================================================
// ROOM
// =============================================================================

/// A room on the plan. Mirrors the `rooms` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    /// Unrotated width in canvas pixels.
    pub width: f64,
    /// Unrotated length in canvas pixels.
    pub length: f64,
    pub top: f64,
    pub left: f64,
    pub rotation: Rotation,
    /// Edit counter; lets the flush tell whether a room changed mid-write.
    pub version: i32,
    /// Creation time, used to keep a stable order across restarts.
    #[serde(skip)]
    pub created_at_ms: i64,
}

impl Room {
    #[must_use]
    pub fn kind(&self) -> RoomKind {
        RoomKind::from_name(&self.name)
    }

    /// Axis-aligned box the room covers on the plan.
    #[must_use]
    pub fn footprint(&self) -> Rect {
        footprint(self.width, self.length, self.left, self.top, self.rotation)
    }

    #[must_use]
    pub fn frame(&self) -> RoomFrame {
        RoomFrame::new(self.width, self.length, self.left, self.top, self.rotation)
    }
}

/// Wall-clock milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
}

// =============================================================================
// OPENINGS
// =============================================================================

/// A stored door or window, attached to a room by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub id: Uuid,
    pub room: String,
    pub top: f64,
    pub left: f64,
    pub rotation: Rotation,
}

// =============================================================================
// PLAN STATE
// =============================================================================

/// The live floor plan.
#[derive(Debug, Default)]
pub struct PlanState {
    /// Rooms in creation order.
    pub rooms: Vec<Room>,
    pub doors: Vec<Opening>,
    pub windows: Vec<Opening>,
    /// Room IDs modified since last flush.
    pub dirty: HashSet<Uuid>,
    /// Room IDs deleted since last flush.
    pub deleted: HashSet<Uuid>,
}

impl PlanState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn room(&self, id: Uuid) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn room_mut(&mut self, id: Uuid) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id == id)
    }

    /// Footprints of every room, optionally skipping one.
    #[must_use]
    pub fn footprints_except(&self, skip: Option<Uuid>) -> Vec<Rect> {
        self.rooms
            .iter()
            .filter(|room| Some(room.id) != skip)
            .map(Room::footprint)
            .collect()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub plan: Arc<RwLock<PlanState>>,
    pub renderer: Arc<PlanRenderer>,
    pub bounds: CanvasBounds,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, renderer: PlanRenderer) -> Self {
        Self {
            pool,
            plan: Arc::new(RwLock::new(PlanState::new())),
            renderer: Arc::new(renderer),
            bounds: CanvasBounds::default(),
        }
    }
}

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
