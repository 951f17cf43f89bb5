//! Plan geometry: quarter-turn rotations, rectangles, and the transform from a
//! room's local frame onto the plan.
//!
//! A room is described in its own unrotated frame, `[0, width] x [0, length]`.
//! On the plan it occupies an axis-aligned footprint anchored at `(left, top)`
//! whose sides swap on quarter turns. Fixtures are positioned in the local
//! frame and mapped onto the footprint by rotating clockwise about the room
//! centre. Only multiples of 90° are supported, so the mapping is exact and
//! uses no trigonometry.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::plan::consts::PX_PER_CM;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("rotation must be a multiple of 90 degrees, got {0}")]
    InvalidRotation(f64),
}

// =============================================================
// Rotation
// =============================================================

/// Clockwise rotation of a room about its centre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Accept an exact multiple of 90°, normalising any number of turns.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRotation` for non-finite values and anything that is
    /// not a multiple of 90.
    pub fn from_degrees(degrees: f64) -> Result<Self, GeometryError> {
        if !degrees.is_finite() || degrees % 90.0 != 0.0 {
            return Err(GeometryError::InvalidRotation(degrees));
        }
        Ok(Self::from_quarter_turns(degrees / 90.0))
    }

    /// Round an arbitrary angle to the nearest quarter turn.
    ///
    /// Used for rotate-handle drags, where the pointer angle is continuous.
    /// Non-finite input snaps to `Deg0`.
    #[must_use]
    pub fn snap(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Self::Deg0;
        }
        Self::from_quarter_turns((degrees / 90.0).round())
    }

    fn from_quarter_turns(turns: f64) -> Self {
        match turns.rem_euclid(4.0) {
            t if t < 0.5 => Self::Deg0,
            t if t < 1.5 => Self::Deg90,
            t if t < 2.5 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// True when the room's width and length swap on the plan.
    #[must_use]
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Rotate an offset from the room centre clockwise (y grows downward).
    #[must_use]
    pub fn apply(self, dx: f64, dy: f64) -> (f64, f64) {
        match self {
            Self::Deg0 => (dx, dy),
            Self::Deg90 => (-dy, dx),
            Self::Deg180 => (-dx, -dy),
            Self::Deg270 => (dy, -dx),
        }
    }
}

impl TryFrom<f64> for Rotation {
    type Error = GeometryError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_degrees(value)
    }
}

impl From<Rotation> for u16 {
    fn from(value: Rotation) -> Self {
        value.degrees()
    }
}

// =============================================================
// Points and rectangles
// =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in plan or local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Build from any two opposite corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self { left, top, width: (a.x - b.x).abs(), height: (a.y - b.y).abs() }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Inclusive overlap: rectangles that share only an edge still overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.left
            || self.left > other.right()
            || self.bottom() < other.top
            || self.top > other.bottom())
    }

    /// The same rectangle turned 90° about its own centre.
    #[must_use]
    pub fn turned_about_center(&self) -> Self {
        let c = self.center();
        Self {
            left: c.x - self.height / 2.0,
            top: c.y - self.width / 2.0,
            width: self.height,
            height: self.width,
        }
    }
}

// =============================================================
// Room frame
// =============================================================

/// Width and height of a `width x length` room on the plan.
#[must_use]
pub fn footprint_size(width: f64, length: f64, rotation: Rotation) -> (f64, f64) {
    if rotation.is_quarter_turn() { (length, width) } else { (width, length) }
}

/// A room's axis-aligned box on the plan.
#[must_use]
pub fn footprint(width: f64, length: f64, left: f64, top: f64, rotation: Rotation) -> Rect {
    let (w, h) = footprint_size(width, length, rotation);
    Rect::new(left, top, w, h)
}

/// Maps points from a room's local frame onto the plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomFrame {
    /// Unrotated room width.
    pub width: f64,
    /// Unrotated room length.
    pub length: f64,
    /// Footprint on the plan.
    pub footprint: Rect,
    pub rotation: Rotation,
}

impl RoomFrame {
    #[must_use]
    pub fn new(width: f64, length: f64, left: f64, top: f64, rotation: Rotation) -> Self {
        Self { width, length, footprint: footprint(width, length, left, top, rotation), rotation }
    }

    /// Local point → plan point.
    #[must_use]
    pub fn to_plan(&self, local: Point) -> Point {
        let (dx, dy) = self
            .rotation
            .apply(local.x - self.width / 2.0, local.y - self.length / 2.0);
        let c = self.footprint.center();
        Point::new(c.x + dx, c.y + dy)
    }

    /// Local rectangle → axis-aligned plan rectangle.
    #[must_use]
    pub fn rect_to_plan(&self, local: Rect) -> Rect {
        let a = self.to_plan(Point::new(local.left, local.top));
        let b = self.to_plan(Point::new(local.right(), local.bottom()));
        Rect::from_corners(a, b)
    }

    /// Local angle (degrees, clockwise from +x) → plan angle.
    #[must_use]
    pub fn angle_to_plan(&self, degrees: f64) -> f64 {
        degrees + f64::from(self.rotation.degrees())
    }
}

// =============================================================
// Units
// =============================================================

#[must_use]
pub fn px_to_cm(px: f64) -> f64 {
    (px / PX_PER_CM).round()
}

#[must_use]
pub fn cm_to_px(cm: f64) -> f64 {
    (cm * PX_PER_CM).round()
}
