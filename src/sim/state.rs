//! World state, construction-time configuration and host-facing snapshots.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::controller::ControllerState;
use super::segment::Segment;
use crate::tuning::Tuning;

/// World configuration supplied by the host at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub initial_position: Vec2,
    pub radius: f32,
    /// Platforms, in the order collisions are resolved.
    pub segments: Vec<Segment>,
}

impl Default for WorldConfig {
    /// The demo layout: a 400x600 canvas, the wheel starting near the
    /// floor, one platform hanging above it.
    fn default() -> Self {
        Self {
            canvas_width: 400.0,
            canvas_height: 600.0,
            initial_position: Vec2::new(200.0, 560.0),
            radius: 20.0,
            segments: vec![Segment::new(
                Vec2::new(100.0, 500.0),
                Vec2::new(300.0, 500.0),
            )],
        }
    }
}

/// Configuration rejected before any tick runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Wheel radius must be strictly positive.
    NonPositiveRadius(f32),
    /// Canvas dimensions must not be negative.
    NegativeCanvas { width: f32, height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveRadius(r) => {
                write!(f, "wheel radius must be positive, got {r}")
            }
            ConfigError::NegativeCanvas { width, height } => {
                write!(f, "canvas dimensions must not be negative, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read-only view the host renders from after each tick.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub grounded: bool,
}

/// Owns the wheel, the platform list and the jump gate. The host drives it
/// through [`super::tick::tick`], one call per display frame; there is no
/// other writer.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) canvas_width: f32,
    pub(crate) canvas_height: f32,
    pub(crate) tuning: Tuning,
    pub(crate) body: Body,
    pub(crate) segments: Vec<Segment>,
    pub(crate) controller: ControllerState,
    pub(crate) time_ticks: u64,
}

impl World {
    pub fn new(config: WorldConfig, tuning: Tuning) -> Result<Self, ConfigError> {
        // `!(r > 0)` also rejects a NaN radius.
        if !(config.radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(config.radius));
        }
        if config.canvas_width < 0.0 || config.canvas_height < 0.0 {
            return Err(ConfigError::NegativeCanvas {
                width: config.canvas_width,
                height: config.canvas_height,
            });
        }

        log::info!(
            "world: {}x{} canvas, {} platform(s), wheel r={} at {}",
            config.canvas_width,
            config.canvas_height,
            config.segments.len(),
            config.radius,
            config.initial_position
        );

        Ok(Self {
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            tuning,
            body: Body::new(config.initial_position, config.radius),
            segments: config.segments,
            controller: ControllerState::default(),
            time_ticks: 0,
        })
    }

    /// Snapshot for rendering, taken after a tick.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.body.pos,
            velocity: self.body.vel,
            radius: self.body.radius,
            grounded: self.grounded(),
        }
    }

    /// The immutable platform list, in resolution order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn controller(&self) -> &ControllerState {
        &self.controller
    }

    /// Ticks advanced since construction.
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn grounded(&self) -> bool {
        self.body.on_ground(&self.segments, self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        let world = World::new(WorldConfig::default(), Tuning::default()).unwrap();
        assert_eq!(world.segments().len(), 1);
        assert_eq!(world.time_ticks(), 0);
        assert_eq!(world.body().radius, 20.0);
    }

    #[test]
    fn zero_radius_is_rejected() {
        let config = WorldConfig {
            radius: 0.0,
            ..WorldConfig::default()
        };
        assert_eq!(
            World::new(config, Tuning::default()).unwrap_err(),
            ConfigError::NonPositiveRadius(0.0)
        );
    }

    #[test]
    fn nan_radius_is_rejected() {
        let config = WorldConfig {
            radius: f32::NAN,
            ..WorldConfig::default()
        };
        assert!(matches!(
            World::new(config, Tuning::default()),
            Err(ConfigError::NonPositiveRadius(_))
        ));
    }

    #[test]
    fn negative_canvas_is_rejected() {
        let config = WorldConfig {
            canvas_height: -600.0,
            ..WorldConfig::default()
        };
        assert!(matches!(
            World::new(config, Tuning::default()),
            Err(ConfigError::NegativeCanvas { .. })
        ));
    }

    #[test]
    fn snapshot_reflects_body_state() {
        let world = World::new(WorldConfig::default(), Tuning::default()).unwrap();
        let snap = world.snapshot();
        assert_eq!(snap.position, world.body().pos);
        assert_eq!(snap.radius, 20.0);
        assert!(!snap.grounded);
    }
}
