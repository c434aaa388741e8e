//! Wheelbound - a deterministic wheel-on-platforms simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision, per-tick stepping)
//! - `tuning`: Data-driven physics balance
//! - `scenario`: JSON scenario files for reproducible headless runs
//!
//! The simulation is defined in frames, not seconds: the host calls
//! [`sim::tick()`] exactly once per display frame, then reads a
//! [`sim::Snapshot`] and the platform list to draw. Window creation, image
//! loading, key-event wiring and frame pacing all live on the host side of
//! that boundary.

pub mod scenario;
pub mod sim;
pub mod tuning;

pub use scenario::Scenario;
pub use sim::{Snapshot, TickEvents, TickInput, World, WorldConfig, tick};
pub use tuning::Tuning;
