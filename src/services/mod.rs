//! Domain services used by HTTP routes and startup.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on protocol translation.

pub mod persistence;
pub mod plan;
pub mod room;
