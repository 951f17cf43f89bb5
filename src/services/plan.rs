//! Plan service: hydration, first-run seeding, and row writes.
//!
//! DESIGN
//! ======
//! Postgres is the durable copy; `PlanState` is the working copy. At startup
//! the plan is seeded (only when the rooms table is empty) and then loaded
//! into memory once. After that, rooms reach the database only through
//! [`flush_rooms`], called by the persistence task.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::plan::geometry::{GeometryError, Rotation};
use crate::state::{AppState, Opening, PlanState, Room, now_ms};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("stored row {id} has an invalid rotation: {source}")]
    CorruptRotation { id: Uuid, source: GeometryError },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// What startup loading did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub seeded: bool,
    pub rooms: usize,
    pub doors: usize,
    pub windows: usize,
}

type RoomRow = (Uuid, String, f64, f64, f64, f64, i32, i32, i64);
type OpeningRow = (Uuid, String, f64, f64, i32);

// =============================================================================
// STARTUP
// =============================================================================

/// Seed an empty database, then hydrate the in-memory plan.
///
/// # Errors
///
/// Returns a database error, or `CorruptRotation` if a stored angle is not
/// a quarter turn.
pub async fn load_plan(state: &AppState) -> Result<LoadSummary, PlanError> {
    let seeded = seed_if_empty(&state.pool).await?;
    let loaded = hydrate(&state.pool).await?;

    let summary = LoadSummary {
        seeded,
        rooms: loaded.rooms.len(),
        doors: loaded.doors.len(),
        windows: loaded.windows.len(),
    };

    let mut plan = state.plan.write().await;
    *plan = loaded;
    info!(rooms = summary.rooms, doors = summary.doors, windows = summary.windows, "hydrated plan from database");
    Ok(summary)
}

/// Insert the sample plan when no rooms exist. Returns whether it seeded.
///
/// # Errors
///
/// Returns a database error if the count or any insert fails.
pub async fn seed_if_empty(pool: &PgPool) -> Result<bool, PlanError> {
    let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM rooms")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        info!(count, "database already has rooms; skipping seed");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    let base_ms = now_ms();
    for (offset, (name, width, length, top, left)) in (0_i64..).zip(SEED_ROOMS) {
        sqlx::query(
            r#"INSERT INTO rooms (id, name, width, length, top, "left", rotation, version, created_at_ms)
               VALUES ($1, $2, $3, $4, $5, $6, 0, 1, $7)"#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(width)
        .bind(length)
        .bind(top)
        .bind(left)
        .bind(base_ms + offset)
        .execute(tx.as_mut())
        .await?;
    }
    for (table, rows) in [("doors", &SEED_DOORS[..]), ("windows", &SEED_WINDOWS[..])] {
        for (room, top, left) in rows {
            sqlx::query(&format!(
                r#"INSERT INTO {table} (id, room, top, "left", rotation) VALUES ($1, $2, $3, $4, 0)"#
            ))
            .bind(Uuid::new_v4())
            .bind(*room)
            .bind(*top)
            .bind(*left)
            .execute(tx.as_mut())
            .await?;
        }
    }
    tx.commit().await?;

    info!(rooms = SEED_ROOMS.len(), doors = SEED_DOORS.len(), windows = SEED_WINDOWS.len(), "seeded sample plan");
    Ok(true)
}

/// (name, width, length, top, left)
const SEED_ROOMS: [(&str, f64, f64, f64, f64); 3] = [
    ("Living Room", 400.0, 300.0, 50.0, 50.0),
    ("Kitchen", 300.0, 200.0, 400.0, 50.0),
    ("Bedroom", 300.0, 300.0, 50.0, 500.0),
];

/// (room, top, left)
const SEED_DOORS: [(&str, f64, f64); 2] = [("Living Room", 150.0, 420.0), ("Kitchen", 450.0, 320.0)];

const SEED_WINDOWS: [(&str, f64, f64); 2] = [("Living Room", 80.0, 200.0), ("Bedroom", 80.0, 600.0)];

// =============================================================================
// HYDRATION
// =============================================================================

/// Load every room and opening into a fresh `PlanState`.
///
/// # Errors
///
/// Returns a database error or `CorruptRotation`.
pub async fn hydrate(pool: &PgPool) -> Result<PlanState, PlanError> {
    let room_rows = sqlx::query_as::<_, RoomRow>(
        r#"SELECT id, name, width, length, top, "left", rotation, version, created_at_ms
           FROM rooms ORDER BY created_at_ms, id"#,
    )
    .fetch_all(pool)
    .await?;
    let door_rows = load_openings(pool, "doors").await?;
    let window_rows = load_openings(pool, "windows").await?;

    let mut plan = PlanState::new();
    plan.rooms = room_rows.into_iter().map(room_from_row).collect::<Result<_, _>>()?;
    plan.doors = door_rows.into_iter().map(opening_from_row).collect::<Result<_, _>>()?;
    plan.windows = window_rows.into_iter().map(opening_from_row).collect::<Result<_, _>>()?;
    Ok(plan)
}

async fn load_openings(pool: &PgPool, table: &str) -> Result<Vec<OpeningRow>, sqlx::Error> {
    sqlx::query_as::<_, OpeningRow>(&format!(r#"SELECT id, room, top, "left", rotation FROM {table} ORDER BY id"#))
        .fetch_all(pool)
        .await
}

fn stored_rotation(id: Uuid, degrees: i32) -> Result<Rotation, PlanError> {
    Rotation::from_degrees(f64::from(degrees)).map_err(|source| PlanError::CorruptRotation { id, source })
}

pub(crate) fn room_from_row(row: RoomRow) -> Result<Room, PlanError> {
    let (id, name, width, length, top, left, rotation, version, created_at_ms) = row;
    Ok(Room { id, name, width, length, top, left, rotation: stored_rotation(id, rotation)?, version, created_at_ms })
}

pub(crate) fn opening_from_row(row: OpeningRow) -> Result<Opening, PlanError> {
    let (id, room, top, left, rotation) = row;
    Ok(Opening { id, room, top, left, rotation: stored_rotation(id, rotation)? })
}

// =============================================================================
// WRITES
// =============================================================================

/// Upsert changed rooms and delete tombstoned ones in one transaction.
///
/// # Errors
///
/// Returns a database error; nothing is committed in that case.
pub async fn flush_rooms(pool: &PgPool, rooms: &[Room], deleted: &[Uuid]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for room in rooms {
        sqlx::query(
            r#"INSERT INTO rooms (id, name, width, length, top, "left", rotation, version, created_at_ms, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, now())
               ON CONFLICT (id) DO UPDATE SET
                   name = EXCLUDED.name, width = EXCLUDED.width, length = EXCLUDED.length,
                   top = EXCLUDED.top, "left" = EXCLUDED."left", rotation = EXCLUDED.rotation,
                   version = EXCLUDED.version, updated_at = now()"#,
        )
        .bind(room.id)
        .bind(&room.name)
        .bind(room.width)
        .bind(room.length)
        .bind(room.top)
        .bind(room.left)
        .bind(i32::from(room.rotation.degrees()))
        .bind(room.version)
        .bind(room.created_at_ms)
        .execute(tx.as_mut())
        .await?;
    }
    if !deleted.is_empty() {
        sqlx::query("DELETE FROM rooms WHERE id = ANY($1)")
            .bind(deleted)
            .execute(tx.as_mut())
            .await?;
    }
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
