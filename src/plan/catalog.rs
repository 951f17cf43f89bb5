//! Room kinds and the built-in room templates.
//!
//! A room's kind is not stored. It is derived from the display name, so a
//! room called "Kitchen" gets kitchen fixtures and anything unrecognised is
//! drawn as a plain custom room.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Serialize;

use crate::plan::consts::MIN_CUSTOM_SIDE_CM;
use crate::plan::geometry::cm_to_px;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    LivingRoom,
    Kitchen,
    Bedroom,
    Bathroom,
    DiningRoom,
    Office,
    Custom,
}

/// Wall of the room's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Top,
    Right,
    Bottom,
    Left,
}

impl RoomKind {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Living Room" => Self::LivingRoom,
            "Kitchen" => Self::Kitchen,
            "Bedroom" => Self::Bedroom,
            "Bathroom" => Self::Bathroom,
            "Dining Room" => Self::DiningRoom,
            "Office" => Self::Office,
            _ => Self::Custom,
        }
    }

    /// Wall the door sits on when none has been chosen.
    #[must_use]
    pub fn default_door_wall(self) -> Wall {
        match self {
            Self::Bedroom => Wall::Right,
            Self::DiningRoom | Self::Office => Wall::Left,
            Self::LivingRoom | Self::Kitchen | Self::Bathroom | Self::Custom => Wall::Top,
        }
    }

    /// Translucent floor fill as a CSS colour.
    #[must_use]
    pub fn fill(self) -> &'static str {
        match self {
            Self::LivingRoom => "rgba(230, 236, 245, 0.5)",
            Self::Kitchen => "rgba(241, 243, 232, 0.5)",
            Self::Bedroom => "rgba(240, 234, 245, 0.5)",
            Self::Bathroom => "rgba(226, 240, 245, 0.5)",
            Self::DiningRoom => "rgba(245, 238, 230, 0.5)",
            Self::Office => "rgba(230, 245, 236, 0.5)",
            Self::Custom => "rgba(240, 240, 240, 0.5)",
        }
    }
}

// =============================================================
// Templates
// =============================================================

/// A preset room offered by the "add room" form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomTemplate {
    pub key: &'static str,
    pub name: &'static str,
    /// Width in canvas pixels.
    pub width: f64,
    /// Length in canvas pixels.
    pub length: f64,
}

pub static TEMPLATES: [RoomTemplate; 6] = [
    RoomTemplate { key: "livingroom", name: "Living Room", width: 350.0, length: 270.0 },
    RoomTemplate { key: "kitchen", name: "Kitchen", width: 240.0, length: 320.0 },
    RoomTemplate { key: "bedroom", name: "Bedroom", width: 300.0, length: 280.0 },
    RoomTemplate { key: "bathroom", name: "Bathroom", width: 180.0, length: 220.0 },
    RoomTemplate { key: "diningroom", name: "Dining Room", width: 280.0, length: 220.0 },
    RoomTemplate { key: "office", name: "Office", width: 220.0, length: 180.0 },
];

#[must_use]
pub fn template(key: &str) -> Option<&'static RoomTemplate> {
    TEMPLATES.iter().find(|t| t.key == key)
}

/// Convert a custom room's centimetre sides to pixels.
///
/// Returns `None` when either side is below the custom-room minimum.
#[must_use]
pub fn custom_dimensions_px(width_cm: f64, length_cm: f64) -> Option<(f64, f64)> {
    if !(width_cm >= MIN_CUSTOM_SIDE_CM && length_cm >= MIN_CUSTOM_SIDE_CM) {
        return None;
    }
    Some((cm_to_px(width_cm), cm_to_px(length_cm)))
}
