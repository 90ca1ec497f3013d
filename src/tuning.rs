//! Data-driven simulation balance
//!
//! Every knob defaults to the values the arena was balanced around; a JSON
//! blob can override them for experiments without touching code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs carried by a [`crate::Simulation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Proximity alert distance under the simulation's range metric
    pub warning_distance: f32,
    /// Debris spawn probability at tick zero
    pub spawn_base_chance: f32,
    /// Per-tick growth of the spawn probability
    pub spawn_ramp_per_tick: f32,
    /// Upper bound the spawn probability saturates at
    pub spawn_chance_cap: f32,
    /// Ticks at the start of a run during which game over cannot trigger
    pub grace_period_ticks: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            warning_distance: WARNING_DISTANCE,
            spawn_base_chance: SPAWN_BASE_CHANCE,
            spawn_ramp_per_tick: SPAWN_RAMP_PER_TICK,
            spawn_chance_cap: SPAWN_CHANCE_CAP,
            grace_period_ticks: GRACE_PERIOD_TICKS,
        }
    }
}

impl Tuning {
    /// Debris spawn probability at the given tick: base + tick * ramp,
    /// saturating at the cap.
    pub fn spawn_chance(&self, tick: u64) -> f32 {
        (self.spawn_base_chance + tick as f32 * self.spawn_ramp_per_tick)
            .min(self.spawn_chance_cap)
    }

    /// Parse overrides from JSON; unknown or missing fields fall back to
    /// defaults.
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(tuning) => Some(tuning),
            Err(e) => {
                log::warn!("ignoring malformed tuning: {e}");
                None
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
