//! Stateless collision and proximity predicates
//!
//! Every check re-derives its answer from current positions using the range
//! metric of [`Body::distance_to`]; no state is held between calls.

use crate::consts::SATELLITE_RADIUS;
use crate::sim::entity::{Body, Debris, Satellite};

/// True when a satellite sits inside a debris danger zone.
pub fn satellite_debris_collision(sat: &Satellite, deb: &Debris) -> bool {
    sat.body.distance_to(&deb.body) < SATELLITE_RADIUS + deb.danger_radius()
}

/// True when two satellites overlap.
pub fn satellite_pair_collision(a: &Satellite, b: &Satellite) -> bool {
    a.body.distance_to(&b.body) < SATELLITE_RADIUS * 2.0
}

/// Near-miss check between a satellite and any other body. Only meaningful
/// for a pair that did not collide in the same pass.
pub fn proximity_warning(sat: &Satellite, other: &Body, warning_distance: f32) -> bool {
    sat.body.distance_to(other) < warning_distance
}
