//! Door, window, and furniture geometry for each kind of room.
//!
//! Everything here is laid out in the room's unrotated local frame first
//! (`[0, width] x [0, length]`, y down) and then carried onto the plan by
//! [`RoomFrame`]. Keeping the per-kind tables rotation-free means a fixture
//! on the top wall ends up on whichever wall the rotation turns to face up.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use serde::Serialize;

use crate::plan::catalog::{RoomKind, Wall};
use crate::plan::consts::*;
use crate::plan::geometry::{Point, Rect, RoomFrame};

/// Quarter-circle door swing. Angles are degrees, clockwise from +x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swing {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoorFixture {
    /// Wall in the room's local frame.
    pub wall: Wall,
    pub rect: Rect,
    pub swing: Swing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FurniturePiece {
    pub name: &'static str,
    pub rect: Rect,
}

/// All fixtures of one room, in plan coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomFixtures {
    pub door: DoorFixture,
    pub windows: Vec<Rect>,
    pub furniture: Vec<FurniturePiece>,
}

/// Compute a room's fixtures on the plan.
#[must_use]
pub fn room_fixtures(frame: &RoomFrame, kind: RoomKind) -> RoomFixtures {
    let door = local_door(kind.default_door_wall(), frame.width, frame.length);
    RoomFixtures {
        door: door_to_plan(frame, door),
        windows: local_windows(kind, frame.width, frame.length)
            .into_iter()
            .map(|w| frame.rect_to_plan(w))
            .collect(),
        furniture: local_furniture(kind, frame.width, frame.length)
            .into_iter()
            .map(|p| FurniturePiece { name: p.name, rect: frame.rect_to_plan(p.rect) })
            .collect(),
    }
}

fn door_to_plan(frame: &RoomFrame, door: DoorFixture) -> DoorFixture {
    DoorFixture {
        wall: door.wall,
        rect: frame.rect_to_plan(door.rect),
        swing: Swing {
            center: frame.to_plan(door.swing.center),
            radius: door.swing.radius,
            start_deg: frame.angle_to_plan(door.swing.start_deg),
            end_deg: frame.angle_to_plan(door.swing.end_deg),
        },
    }
}

// =============================================================
// Doors
// =============================================================

/// Door centred on `wall`, with its swing hinged on the interior side.
#[must_use]
pub fn local_door(wall: Wall, width: f64, length: f64) -> DoorFixture {
    let along_x = width / 2.0 - DOOR_WIDTH / 2.0;
    let along_y = length / 2.0 - DOOR_WIDTH / 2.0;

    let (rect, center, start_deg, end_deg) = match wall {
        Wall::Top => (
            Rect::new(along_x, 0.0, DOOR_WIDTH, DOOR_DEPTH),
            Point::new(along_x, DOOR_DEPTH),
            -90.0,
            0.0,
        ),
        Wall::Bottom => (
            Rect::new(along_x, length - DOOR_DEPTH, DOOR_WIDTH, DOOR_DEPTH),
            Point::new(along_x, length - DOOR_DEPTH),
            0.0,
            90.0,
        ),
        Wall::Left => (
            Rect::new(0.0, along_y, DOOR_DEPTH, DOOR_WIDTH),
            Point::new(DOOR_DEPTH, along_y),
            180.0,
            270.0,
        ),
        Wall::Right => (
            Rect::new(width - DOOR_DEPTH, along_y, DOOR_DEPTH, DOOR_WIDTH),
            Point::new(width - DOOR_DEPTH, along_y),
            -90.0,
            0.0,
        ),
    };

    DoorFixture { wall, rect, swing: Swing { center, radius: DOOR_WIDTH, start_deg, end_deg } }
}

// =============================================================
// Windows
// =============================================================

/// Window rectangles in the local frame.
#[must_use]
pub fn local_windows(kind: RoomKind, width: f64, length: f64) -> Vec<Rect> {
    let on_top = |left: f64, span: f64| Rect::new(left, 0.0, span, WINDOW_DEPTH);
    let on_bottom = |left: f64, span: f64| Rect::new(left, length - WINDOW_DEPTH, span, WINDOW_DEPTH);
    let upright = |left: f64, top: f64, span: f64| Rect::new(left, top, span, WINDOW_DEPTH).turned_about_center();

    match kind {
        RoomKind::LivingRoom => vec![on_top(0.0, WINDOW_WIDTH), on_top(width - WINDOW_WIDTH, WINDOW_WIDTH)],
        RoomKind::Bedroom => vec![on_top(width * 0.3, WINDOW_WIDTH * 1.2)],
        RoomKind::Kitchen => vec![on_bottom(width * 0.4, WINDOW_WIDTH)],
        RoomKind::Bathroom => vec![on_bottom(width - WINDOW_WIDTH, WINDOW_WIDTH * 0.7)],
        RoomKind::DiningRoom => vec![upright(width - WINDOW_WIDTH * 0.92, length * 0.5, WINDOW_WIDTH * 1.7)],
        RoomKind::Office => vec![
            on_top(width * 0.25, WINDOW_WIDTH * 0.7),
            upright(width - WINDOW_WIDTH * 0.57, length * 0.7, WINDOW_WIDTH),
        ],
        RoomKind::Custom => vec![on_top(width * 0.3, WINDOW_WIDTH)],
    }
}

// =============================================================
// Furniture
// =============================================================

/// Furniture rectangles in the local frame. Custom rooms are empty.
#[must_use]
pub fn local_furniture(kind: RoomKind, width: f64, length: f64) -> Vec<FurniturePiece> {
    let piece = |name, left, top, w, h| FurniturePiece { name, rect: Rect::new(left, top, w, h) };
    // Full-width pieces along the bottom wall, inset from both sides.
    let along_bottom = |name, depth: f64| piece(name, WALL_INSET, length - WALL_INSET - depth, width - 2.0 * WALL_INSET, depth);

    match kind {
        RoomKind::LivingRoom => vec![
            piece("sofa", width * 0.1, length * 0.2, width * 0.5, SOFA_DEPTH),
            piece("coffee_table", width * 0.35, length * 0.5, COFFEE_TABLE.0, COFFEE_TABLE.1),
            piece("tv_stand", width * 0.7, length * 0.2, TV_STAND.0, TV_STAND.1),
        ],
        RoomKind::Kitchen => vec![
            along_bottom("counter", COUNTER_DEPTH),
            piece("island", width * 0.35, length * 0.4, width * 0.3, ISLAND_DEPTH),
            piece("fridge", width - CORNER_INSET - FRIDGE.0, length * 0.3, FRIDGE.0, FRIDGE.1),
            piece("stove", width * 0.35, length - CORNER_INSET - STOVE.1, STOVE.0, STOVE.1),
        ],
        RoomKind::Bedroom => vec![
            piece("bed", width * 0.1, length * 0.3, width * 0.5, BED_DEPTH),
            piece("nightstand", width * 0.65, length * 0.3, NIGHTSTAND.0, NIGHTSTAND.1),
            piece("wardrobe", width * 0.1, length * 0.7, width * 0.3, WARDROBE_DEPTH),
        ],
        RoomKind::Bathroom => vec![
            piece("toilet", width - CORNER_INSET - TOILET.0, CORNER_INSET, TOILET.0, TOILET.1),
            piece("sink", width - CORNER_INSET - SINK.0, length * 0.4, SINK.0, SINK.1),
            piece("shower", CORNER_INSET, CORNER_INSET, SHOWER.0, SHOWER.1),
            piece("bathtub", CORNER_INSET, length - CORNER_INSET - BATHTUB_DEPTH, width * 0.6, BATHTUB_DEPTH),
        ],
        RoomKind::DiningRoom => vec![
            piece("dining_table", width * 0.25, length * 0.25, width * 0.5, DINING_TABLE_DEPTH),
            along_bottom("sideboard", SIDEBOARD_DEPTH),
        ],
        RoomKind::Office => vec![
            piece("desk", width * 0.6 - CORNER_INSET, CORNER_INSET, width * 0.4, DESK_DEPTH),
            piece("office_chair", width * 0.8 - OFFICE_CHAIR.0, length * 0.25, OFFICE_CHAIR.0, OFFICE_CHAIR.1),
            along_bottom("bookshelf", BOOKSHELF_DEPTH),
        ],
        RoomKind::Custom => Vec::new(),
    }
}
