//! The simulated wheel: kinematic state and per-tick motion integration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::segment::Segment;
use crate::tuning::Tuning;

/// Mutable kinematic state of the wheel.
///
/// Created once at world construction and mutated every tick; the wheel is
/// never destroyed during a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Center height of the wheel when resting on the nominal floor.
    #[inline]
    fn floor_y(&self, canvas_height: f32) -> f32 {
        canvas_height - self.radius
    }

    /// True while the wheel rests on the nominal floor or touches any
    /// platform. Both grounding sources are independent; the floor test is
    /// an exact comparison against the value the floor clamp writes.
    pub fn on_ground(&self, segments: &[Segment], canvas_height: f32) -> bool {
        if self.pos.y == self.floor_y(canvas_height) {
            return true;
        }
        segments
            .iter()
            .any(|s| s.intersects_circle(self.pos, self.radius))
    }

    /// Advance one frame of motion, in fixed order: Euler step, damping,
    /// horizontal wrap, gravity, floor clamp. Platform resolution happens
    /// afterwards in [`super::collision::resolve_segments`].
    ///
    /// Canvas y grows downward, so gravity adds to `vel.y` while the wheel
    /// is strictly above the floor line.
    pub fn integrate(&mut self, tuning: &Tuning, canvas_width: f32, canvas_height: f32) {
        self.pos += self.vel;
        self.vel *= tuning.damping;

        // Cylindrical world on the x axis only.
        if self.pos.x > canvas_width + self.radius {
            self.pos.x = -self.radius;
        }
        if self.pos.x < -self.radius {
            self.pos.x = canvas_width + self.radius;
        }

        let floor = self.floor_y(canvas_height);
        if self.pos.y < floor {
            self.vel.y += tuning.gravity;
        } else if self.pos.y > floor {
            self.pos.y = floor;
        }
    }
}
