//! Plan export: SVG scene generation and PNG rasterization.
//!
//! The SVG is the single description of the drawing. PNG export parses it
//! with `usvg` and rasterizes onto a `tiny-skia` pixmap, so both formats
//! always agree. Fixture geometry comes from [`crate::plan::fixtures`] in
//! plan coordinates; only the text labels carry a rotate transform.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::sync::Arc;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use tracing::debug;

use crate::plan::consts::{EXPORT_HEIGHT, EXPORT_MAX_SCALE, EXPORT_WIDTH};
use crate::plan::fixtures::{DoorFixture, RoomFixtures, room_fixtures};
use crate::plan::geometry::{Point, Rect, px_to_cm};
use crate::state::Room;

const OUTLINE_COLOR: &str = "#2c3e50";
const DOOR_COLOR: &str = "#34495e";
const WINDOW_COLOR: &str = "#87CEEB";
const FURNITURE_COLOR: &str = "#95a5a6";
const BACKGROUND_COLOR: &str = "#ffffff";
const LABEL_FONT_PX: f64 = 16.0;
const DIMENSION_FONT_PX: f64 = 14.0;
/// Distance of the dimension label above the room's local bottom wall.
const DIMENSION_LABEL_INSET: f64 = 30.0;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("scale must be greater than 0 and at most {max}, got {0}", max = EXPORT_MAX_SCALE)]
    InvalidScale(f32),
    #[error("failed to parse generated SVG: {0}")]
    Parse(#[from] usvg::Error),
    #[error("failed to allocate {width}x{height} surface")]
    Surface { width: u32, height: u32 },
    #[error("failed to encode PNG: {0}")]
    Encode(String),
}

/// Knobs for a single export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Output pixels per canvas pixel (PNG only).
    pub scale: f32,
    /// Draw furniture outlines.
    pub furniture: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { scale: 1.0, furniture: true }
    }
}

// =============================================================
// Renderer
// =============================================================

/// Rasterizes plans. Holds the font database so it is loaded once per process.
pub struct PlanRenderer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl PlanRenderer {
    #[must_use]
    pub fn new(load_system_fonts: bool) -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        if load_system_fonts {
            fontdb.load_system_fonts();
        }
        debug!(faces = fontdb.len(), "export font database ready");
        Self { fontdb: Arc::new(fontdb) }
    }

    /// Renderer with an empty font database. Labels are skipped.
    #[must_use]
    pub fn without_system_fonts() -> Self {
        Self::new(false)
    }

    /// Render the plan to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error for a scale outside `(0, EXPORT_MAX_SCALE]`, an
    /// unusable surface size, or an SVG/PNG failure.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn render_png(&self, rooms: &[Room], options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
        let scale = options.scale;
        if !scale.is_finite() || scale <= 0.0 || scale > EXPORT_MAX_SCALE {
            return Err(ExportError::InvalidScale(scale));
        }

        let svg = render_svg(rooms, options);

        let mut usvg_options = usvg::Options::default();
        usvg_options.fontdb = Arc::clone(&self.fontdb);
        let tree = usvg::Tree::from_str(&svg, &usvg_options)?;

        let size = tree.size().to_int_size();
        let scaled_width = (size.width() as f32 * scale).ceil();
        let scaled_height = (size.height() as f32 * scale).ceil();
        if scaled_width < 1.0 || scaled_height < 1.0 || scaled_width > u32::MAX as f32 || scaled_height > u32::MAX as f32 {
            return Err(ExportError::InvalidScale(scale));
        }
        let (width, height) = (scaled_width as u32, scaled_height as u32);

        let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::Surface { width, height })?;
        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| ExportError::Encode(e.to_string()))
    }
}

// =============================================================
// SVG
// =============================================================

/// Build the SVG document for a plan. Rooms are drawn in slice order.
#[must_use]
pub fn render_svg(rooms: &[Room], options: &ExportOptions) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{EXPORT_WIDTH}\" height=\"{EXPORT_HEIGHT}\" \
         viewBox=\"0 0 {EXPORT_WIDTH} {EXPORT_HEIGHT}\">\n"
    );
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{EXPORT_WIDTH}\" height=\"{EXPORT_HEIGHT}\" fill=\"{BACKGROUND_COLOR}\"/>\n"
    ));

    for room in rooms {
        push_room(&mut svg, room, options);
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_room(svg: &mut String, room: &Room, options: &ExportOptions) {
    let frame = room.frame();
    let RoomFixtures { door, windows, furniture } = room_fixtures(&frame, room.kind());

    svg.push_str(&format!("  <g data-room=\"{}\">\n", room.id));
    push_rect(svg, &frame.footprint, room.kind().fill(), Some((OUTLINE_COLOR, 2.0)));

    if options.furniture {
        for piece in &furniture {
            push_rect(svg, &piece.rect, "none", Some((FURNITURE_COLOR, 1.0)));
        }
    }

    push_door(svg, &door);

    for window in &windows {
        push_rect(svg, window, WINDOW_COLOR, Some((OUTLINE_COLOR, 2.0)));
        push_mullion(svg, window);
    }

    let rotation = f64::from(room.rotation.degrees());
    let center = frame.footprint.center();
    push_text(svg, &room.name, center, rotation, LABEL_FONT_PX, true);

    let dims_anchor = frame.to_plan(Point::new(frame.width / 2.0, frame.length - DIMENSION_LABEL_INSET));
    let dims = format!("{}\u{d7}{}cm", px_to_cm(room.width), px_to_cm(room.length));
    push_text(svg, &dims, dims_anchor, rotation, DIMENSION_FONT_PX, false);

    svg.push_str("  </g>\n");
}

fn push_rect(svg: &mut String, rect: &Rect, fill: &str, stroke: Option<(&str, f64)>) {
    let stroke_attrs = match stroke {
        Some((color, width)) => format!(" stroke=\"{color}\" stroke-width=\"{width}\""),
        None => String::new(),
    };
    svg.push_str(&format!(
        "    <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{fill}\"{stroke_attrs}/>\n",
        rect.left, rect.top, rect.width, rect.height
    ));
}

fn push_door(svg: &mut String, door: &DoorFixture) {
    push_rect(svg, &door.rect, DOOR_COLOR, None);

    let swing = door.swing;
    let start = arc_point(swing.center, swing.radius, swing.start_deg);
    let end = arc_point(swing.center, swing.radius, swing.end_deg);
    svg.push_str(&format!(
        "    <path d=\"M {:.2} {:.2} A {r:.2} {r:.2} 0 0 1 {:.2} {:.2}\" fill=\"none\" stroke=\"{OUTLINE_COLOR}\" stroke-width=\"2\"/>\n",
        start.x,
        start.y,
        end.x,
        end.y,
        r = swing.radius,
    ));
}

/// Point on a circle; angle is degrees clockwise from +x with y down.
fn arc_point(center: Point, radius: f64, degrees: f64) -> Point {
    let rad = degrees.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Divider across the middle of a window's long side.
fn push_mullion(svg: &mut String, window: &Rect) {
    let c = window.center();
    let (x1, y1, x2, y2) = if window.width >= window.height {
        (c.x, window.top, c.x, window.bottom())
    } else {
        (window.left, c.y, window.right(), c.y)
    };
    svg.push_str(&format!(
        "    <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{OUTLINE_COLOR}\" stroke-width=\"2\"/>\n"
    ));
}

fn push_text(svg: &mut String, text: &str, at: Point, rotation: f64, size: f64, bold: bool) {
    let weight = if bold { " font-weight=\"bold\"" } else { "" };
    svg.push_str(&format!(
        "    <text x=\"{x:.2}\" y=\"{y:.2}\" transform=\"rotate({rotation} {x:.2} {y:.2})\" \
         font-family=\"Arial, sans-serif\" font-size=\"{size}\"{weight} text-anchor=\"middle\" \
         dominant-baseline=\"middle\" fill=\"{OUTLINE_COLOR}\">{}</text>\n",
        escape_xml(text),
        x = at.x,
        y = at.y,
    ));
}

/// Escape text for use in SVG element content and attribute values.
///
/// Characters XML 1.0 cannot carry (C0 controls other than tab, newline and
/// carriage return, plus U+FFFE and U+FFFF) are dropped.
#[must_use]
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars().filter(|ch| is_xml_char(*ch)) {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | '\u{20}'..='\u{fffd}' | '\u{10000}'..='\u{10ffff}')
}
