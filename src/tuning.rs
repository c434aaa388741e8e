//! Data-driven physics balance
//!
//! Two historical rule sets of the game diverged only in their constants
//! (pull strength, steer impulse, jump gating), so both live here as
//! configurations of a single parameter block rather than as code forks.

use serde::{Deserialize, Serialize};

/// Physics constants for one world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Per-tick velocity retention on both axes (1.0 = frictionless).
    pub damping: f32,
    /// Downward acceleration per tick while above the floor line.
    pub gravity: f32,
    /// Horizontal velocity added per tick while steering.
    pub move_impulse: f32,
    /// Upward velocity applied when a jump fires.
    pub jump_impulse: f32,
    /// Consecutive grounded ticks required before a jump can fire.
    /// Zero arms the jump the moment the wheel touches down.
    pub grounded_threshold: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            damping: 0.8,
            gravity: 0.5,
            move_impulse: 0.5,
            jump_impulse: 40.0,
            grounded_threshold: 50,
        }
    }
}

impl Tuning {
    /// Legacy rule set: stronger pull, coarser steering, and a jump that
    /// fires immediately on press while grounded.
    pub fn classic() -> Self {
        Self {
            gravity: 1.0,
            move_impulse: 1.0,
            grounded_threshold: 0,
            ..Self::default()
        }
    }
}
