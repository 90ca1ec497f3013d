//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only
//! - Seeded RNG only, owned by the simulation
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::{proximity_warning, satellite_debris_collision, satellite_pair_collision};
pub use entity::{Body, Debris, DebrisSize, SatStatus, Satellite};
pub use field::DebrisField;
pub use state::{SimStats, Simulation};
pub use tick::tick;
