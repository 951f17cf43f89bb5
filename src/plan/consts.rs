//! Shared numeric constants for plan geometry, placement, and export.

// ── Units ───────────────────────────────────────────────────────

/// Canvas pixels per centimetre.
pub const PX_PER_CM: f64 = 3.78;

/// Smallest side accepted for a custom room, in centimetres.
pub const MIN_CUSTOM_SIDE_CM: f64 = 50.0;

// ── Canvas ──────────────────────────────────────────────────────

/// Width of the editable plan area in pixels.
pub const CANVAS_WIDTH: f64 = 1000.0;

/// Height of the editable plan area in pixels.
pub const CANVAS_HEIGHT: f64 = 700.0;

// ── Placement search ────────────────────────────────────────────

/// Step between candidate cells.
pub const GRID_SIZE: f64 = 10.0;

/// First row and column the search tries.
pub const PLACEMENT_ORIGIN: f64 = 50.0;

/// Rows at or beyond this `top` are not searched.
pub const PLACEMENT_MAX_TOP: f64 = 600.0;

/// Vertical gap left above a room stacked below the plan.
pub const STACK_GAP: f64 = 20.0;

// ── Openings ────────────────────────────────────────────────────

/// Door leaf width along the wall.
pub const DOOR_WIDTH: f64 = 80.0;

/// Door depth into the room.
pub const DOOR_DEPTH: f64 = 15.0;

/// Default window length along the wall.
pub const WINDOW_WIDTH: f64 = 120.0;

/// Window depth into the room.
pub const WINDOW_DEPTH: f64 = 10.0;

// ── Furniture sizes not derived from the room ───────────────────

pub const SOFA_DEPTH: f64 = 40.0;
pub const COFFEE_TABLE: (f64, f64) = (60.0, 40.0);
pub const TV_STAND: (f64, f64) = (60.0, 20.0);
pub const COUNTER_DEPTH: f64 = 30.0;
pub const ISLAND_DEPTH: f64 = 40.0;
pub const FRIDGE: (f64, f64) = (40.0, 40.0);
pub const STOVE: (f64, f64) = (50.0, 40.0);
pub const BED_DEPTH: f64 = 80.0;
pub const NIGHTSTAND: (f64, f64) = (30.0, 30.0);
pub const WARDROBE_DEPTH: f64 = 30.0;
pub const TOILET: (f64, f64) = (30.0, 40.0);
pub const SINK: (f64, f64) = (40.0, 30.0);
pub const SHOWER: (f64, f64) = (60.0, 60.0);
pub const BATHTUB_DEPTH: f64 = 40.0;
pub const DINING_TABLE_DEPTH: f64 = 60.0;
pub const SIDEBOARD_DEPTH: f64 = 25.0;
pub const DESK_DEPTH: f64 = 40.0;
pub const OFFICE_CHAIR: (f64, f64) = (30.0, 30.0);
pub const BOOKSHELF_DEPTH: f64 = 25.0;

/// Inset used by furniture anchored to a wall by a fixed offset.
pub const WALL_INSET: f64 = 10.0;

/// Inset used by small fixtures anchored to a corner.
pub const CORNER_INSET: f64 = 15.0;

// ── Export ──────────────────────────────────────────────────────

/// Exported bitmap width in pixels at scale 1.
pub const EXPORT_WIDTH: u32 = 1200;

/// Exported bitmap height in pixels at scale 1.
pub const EXPORT_HEIGHT: u32 = 1000;

/// Largest accepted PNG export scale. At 4 the surface is 4800x4000.
pub const EXPORT_MAX_SCALE: f32 = 4.0;
