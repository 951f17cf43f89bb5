//! Floor-plan geometry, placement, fixtures, and export.
//!
//! Everything in here is pure: no locks, no I/O, no async. Services feed it
//! snapshots of rooms and hand the results to routes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Rotation, rectangles, footprints, local-to-plan transform |
//! | [`catalog`] | Room kinds, templates, door walls, fill colours |
//! | [`placement`] | Grid-search auto-placement and canvas clamping |
//! | [`fixtures`] | Door, window, and furniture geometry per room kind |
//! | [`export`] | SVG scene and PNG rasterization |
//! | [`consts`] | Shared numeric constants (canvas size, fixture sizes, etc.) |

pub mod catalog;
pub mod consts;
pub mod export;
pub mod fixtures;
pub mod geometry;
pub mod placement;
