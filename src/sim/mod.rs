//! Deterministic simulation module
//!
//! All simulation logic lives here. This module must be pure and
//! deterministic:
//! - One tick per display frame, no wall-clock or delta-time input
//! - Stable platform iteration order (the construction order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod controller;
pub mod segment;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{reflect, resolve_segments};
pub use controller::ControllerState;
pub use segment::Segment;
pub use state::{ConfigError, Snapshot, World, WorldConfig};
pub use tick::{TickEvents, TickInput, tick};
