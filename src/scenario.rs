//! JSON scenario files for headless runs
//!
//! A scenario bundles world configuration, tuning and a scripted input
//! sequence, so a run can be reproduced bit-for-bit from a single file.
//! Omitted sections fall back to their defaults; only `frames` is required.

use serde::{Deserialize, Serialize};

use crate::sim::{ConfigError, TickInput, World, WorldConfig};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub tuning: Tuning,
    /// One input record per tick; the run is exactly this long.
    pub frames: Vec<TickInput>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn build_world(&self) -> Result<World, ConfigError> {
        World::new(self.world.clone(), self.tuning)
    }
}
