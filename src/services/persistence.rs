//! Persistence service: background flush for dirty and deleted rooms.
//!
//! DESIGN
//! ======
//! A background task snapshots dirty rooms and tombstones under the plan
//! lock, releases it, writes everything in one transaction, then sleeps for
//! the configured interval. Handlers never wait on Postgres.
//!
//! ERROR HANDLING
//! ==============
//! Dirty flags and tombstones are cleared only after a successful commit,
//! and a dirty flag only if the room's version is unchanged since the
//! snapshot. Repeated upserts are acceptable; silent data loss is not.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::state::{AppState, Room};

/// Spawn the background persistence task. Returns a handle for shutdown.
pub fn spawn_persistence_task(state: AppState, flush_interval_ms: u64) -> JoinHandle<()> {
    info!(flush_interval_ms, "room persistence flush configured");
    tokio::spawn(async move {
        loop {
            flush_all_dirty(&state).await;
            tokio::time::sleep(Duration::from_millis(flush_interval_ms)).await;
        }
    })
}

#[derive(Debug, Default)]
struct FlushBatch {
    rooms: Vec<Room>,
    flushed_versions: Vec<(Uuid, i32)>,
    deleted: Vec<Uuid>,
}

impl FlushBatch {
    fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.deleted.is_empty()
    }
}

/// Write every pending change once. Used by the task loop and at shutdown.
pub async fn flush_all_dirty(state: &AppState) {
    // PHASE: SNAPSHOT
    // WHY: clone under the lock, then do I/O lock-free.
    let batch = {
        let plan = state.plan.read().await;
        let rooms = plan
            .dirty
            .iter()
            .filter_map(|id| plan.room(*id).cloned())
            .collect::<Vec<_>>();
        let flushed_versions = rooms.iter().map(|room| (room.id, room.version)).collect();
        let deleted = plan.deleted.iter().copied().collect();
        FlushBatch { rooms, flushed_versions, deleted }
    };
    if batch.is_empty() {
        return;
    }

    // PHASE: WRITE + ACK
    // WHY: on failure the flags stay set and the next cycle retries.
    match crate::services::plan::flush_rooms(&state.pool, &batch.rooms, &batch.deleted).await {
        Ok(()) => {
            debug!(upserted = batch.rooms.len(), deleted = batch.deleted.len(), "flushed plan changes");
            clear_flushed(state, &batch).await;
        }
        Err(e) => {
            error!(error = %e, upserted = batch.rooms.len(), deleted = batch.deleted.len(), "persistence flush failed");
        }
    }
}

async fn clear_flushed(state: &AppState, batch: &FlushBatch) {
    let mut plan = state.plan.write().await;

    for (room_id, flushed_version) in &batch.flushed_versions {
        // EDGE: keep dirty flag if the room was edited again after snapshot.
        let can_clear = match plan.room(*room_id) {
            Some(current) => current.version == *flushed_version,
            None => true,
        };
        if can_clear {
            plan.dirty.remove(room_id);
        }
    }
    for room_id in &batch.deleted {
        plan.deleted.remove(room_id);
    }
}

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;
