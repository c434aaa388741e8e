//! Per-frame simulation step
//!
//! One `tick` advances all state by exactly one frame-unit. Nothing in here
//! suspends or reads the wall clock; given the same input sequence and
//! world configuration, repeated runs produce bit-identical trajectories.

use serde::{Deserialize, Serialize};

use super::collision;
use super::state::World;

/// Discrete button state for a single tick. Owned by the host, which
/// updates it from its key events; the simulation only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// What happened during a tick, for host-side effects and diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickEvents {
    /// A jump impulse fired this tick.
    pub jumped: bool,
    /// The wheel gained ground contact this tick.
    pub landed: bool,
    /// Platform contacts resolved this tick.
    pub contacts: u32,
}

/// Advance the world by one frame.
///
/// Fixed order: controller, integration, platform resolution. The
/// controller reads the grounded state from before integration, so a jump
/// always pushes off the surface the wheel was actually touching.
pub fn tick(world: &mut World, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    let was_grounded = world.body.on_ground(&world.segments, world.canvas_height);
    events.jumped = world
        .controller
        .apply(&mut world.body, input, was_grounded, &world.tuning);

    world
        .body
        .integrate(&world.tuning, world.canvas_width, world.canvas_height);
    events.contacts = collision::resolve_segments(&mut world.body, &world.segments);

    let now_grounded = world.body.on_ground(&world.segments, world.canvas_height);
    events.landed = now_grounded && !was_grounded;

    world.time_ticks += 1;
    events
}
