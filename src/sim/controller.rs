//! Input-to-impulse mapping and the jump dwell gate.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Jump gate state carried across ticks.
///
/// The wheel must dwell on the ground for `Tuning::grounded_threshold`
/// consecutive ticks before a jump arms; leaving the ground resets the
/// dwell and disarms. A threshold of zero arms on touchdown.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ControllerState {
    /// Consecutive grounded ticks, saturating at the arming threshold.
    pub grounded_ticks: u32,
    /// True once the wheel has dwelt on the ground long enough to jump.
    pub jump_armed: bool,
}

impl ControllerState {
    /// Map this tick's input onto the body.
    ///
    /// Steering is exclusive: holding both directions cancels to a hard
    /// zero, exactly as holding neither does. The impulse accumulates tick
    /// over tick; damping supplies the terminal speed.
    ///
    /// Returns true if a jump fired.
    pub fn apply(
        &mut self,
        body: &mut Body,
        input: &TickInput,
        grounded: bool,
        tuning: &Tuning,
    ) -> bool {
        match (input.left, input.right) {
            (false, true) => body.vel.x += tuning.move_impulse,
            (true, false) => body.vel.x -= tuning.move_impulse,
            _ => body.vel.x = 0.0,
        }

        if grounded {
            if self.grounded_ticks < tuning.grounded_threshold {
                self.grounded_ticks += 1;
            }
            if self.grounded_ticks >= tuning.grounded_threshold {
                self.jump_armed = true;
            }
        } else {
            self.grounded_ticks = 0;
            self.jump_armed = false;
        }

        if self.jump_armed && input.jump {
            body.vel.y -= tuning.jump_impulse;
            self.grounded_ticks = 0;
            self.jump_armed = false;
            return true;
        }
        false
    }
}
