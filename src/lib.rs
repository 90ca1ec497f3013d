//! Mission Control - an orbital traffic simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, debris spawning, collisions, scoring)
//! - `tuning`: Data-driven simulation balance

pub mod sim;
pub mod tuning;

pub use sim::{SimStats, Simulation};
pub use tuning::Tuning;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Arena dimensions (shared by the debris generator and the cleanup pass)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Debris outside the arena by more than this margin are removed
    pub const CLEANUP_MARGIN: f32 = 50.0;

    /// Collision radius of every satellite
    pub const SATELLITE_RADIUS: f32 = 20.0;
    /// Distance under which a non-colliding object triggers a proximity alert
    pub const WARNING_DISTANCE: f32 = 80.0;

    /// Satellite speed bounds, enforced on every commanded speed change
    pub const SAT_MIN_SPEED: f32 = 0.5;
    pub const SAT_MAX_SPEED: f32 = 5.0;

    /// Fuel costs of the satellite control surface
    pub const HEADING_FUEL_COST: f32 = 2.0;
    pub const SPEED_FUEL_COST: f32 = 1.5;
    pub const DEORBIT_FUEL_COST: f32 = 5.0;
    /// Fuel burned passively by an active satellite each tick
    pub const PASSIVE_FUEL_DRAIN: f32 = 0.1;
    /// Below this fuel level a satellite reports `Warning`
    pub const FUEL_WARNING_THRESHOLD: f32 = 20.0;
    /// Fuel of a newly launched satellite when unspecified
    pub const DEFAULT_FUEL: f32 = 100.0;

    /// Debris spawn probability ramp: base + tick * ramp, capped
    pub const SPAWN_BASE_CHANCE: f32 = 0.05;
    pub const SPAWN_RAMP_PER_TICK: f32 = 0.0005;
    pub const SPAWN_CHANCE_CAP: f32 = 0.3;

    /// Game over cannot trigger during the first ticks of a run
    pub const GRACE_PERIOD_TICKS: u64 = 10;
}

/// Normalize a heading in degrees to [0, 360)
#[inline]
pub fn normalize_heading(deg: f32) -> f32 {
    let h = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

/// Unit vector pointing along a heading in degrees
#[inline]
pub fn heading_vector(deg: f32) -> Vec2 {
    let rad = deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize_heading(0.0), 0.0);
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(450.0), 90.0);
        assert_eq!(normalize_heading(-30.0), 330.0);
        assert_eq!(normalize_heading(-720.0), 0.0);
    }

    #[test]
    fn heading_vector_cardinal_directions() {
        assert!((heading_vector(0.0) - Vec2::X).length() < 1e-6);
        assert!((heading_vector(90.0) - Vec2::Y).length() < 1e-6);
        assert!((heading_vector(180.0) + Vec2::X).length() < 1e-6);
    }

    proptest! {
        #[test]
        fn normalized_heading_in_range(deg in -100_000.0f32..100_000.0) {
            let h = normalize_heading(deg);
            prop_assert!((0.0..360.0).contains(&h), "{deg} normalized to {h}");
        }

        #[test]
        fn heading_vector_is_unit_length(deg in -720.0f32..720.0) {
            prop_assert!((heading_vector(deg).length() - 1.0).abs() < 1e-5);
        }
    }
}
