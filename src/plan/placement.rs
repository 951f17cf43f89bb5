//! Automatic placement for new rooms and canvas clamping for moved ones.
//!
//! Placement scans a coarse grid row by row, left to right, and takes the
//! first cell where the new room touches no existing footprint. When the
//! grid is full the room is stacked under the lowest existing room instead
//! of failing.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use serde::{Deserialize, Serialize};

use crate::plan::consts::{
    CANVAS_HEIGHT, CANVAS_WIDTH, GRID_SIZE, PLACEMENT_MAX_TOP, PLACEMENT_ORIGIN, STACK_GAP,
};
use crate::plan::geometry::Rect;

/// Top-left corner of a room on the plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

/// Extent of the editable plan area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self { width: CANVAS_WIDTH, height: CANVAS_HEIGHT }
    }
}

/// Find a free spot for a `width x length` room among `occupied` footprints.
///
/// The candidate is tested unrotated. Existing rooms are tested by their
/// footprint, so rotated rooms block the area they actually cover.
#[must_use]
pub fn next_position(occupied: &[Rect], width: f64, length: f64, bounds: CanvasBounds) -> Position {
    let max_left = bounds.width - width;

    let mut top = PLACEMENT_ORIGIN;
    while top < PLACEMENT_MAX_TOP {
        let mut left = PLACEMENT_ORIGIN;
        while left < max_left {
            let candidate = Rect::new(left, top, width, length);
            if !occupied.iter().any(|room| candidate.overlaps(room)) {
                return Position { top, left };
            }
            left += GRID_SIZE;
        }
        top += GRID_SIZE;
    }

    stack_below(occupied)
}

/// Position under the lowest footprint, at the left margin.
#[must_use]
pub fn stack_below(occupied: &[Rect]) -> Position {
    let max_bottom = occupied.iter().map(Rect::bottom).fold(0.0, f64::max);
    Position { top: max_bottom + STACK_GAP, left: PLACEMENT_ORIGIN }
}

/// Keep a dragged footprint inside the canvas.
///
/// The far edge is applied before the near one, so a footprint larger than
/// the canvas pins to the origin.
#[must_use]
pub fn clamp_to_canvas(footprint_width: f64, footprint_height: f64, target: Position, bounds: CanvasBounds) -> Position {
    let max_left = bounds.width - footprint_width;
    let max_top = bounds.height - footprint_height;
    Position { top: target.top.min(max_top).max(0.0), left: target.left.min(max_left).max(0.0) }
}
