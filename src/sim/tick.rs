//! Per-tick orchestration: motion, spawning, collisions, cleanup, scoring
//!
//! One call to [`tick`] advances the simulation by exactly one discrete step.
//! The caller drives it at whatever cadence it likes and drains events
//! afterwards.

use rand::Rng;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, CLEANUP_MARGIN};
use crate::sim::collision::{
    proximity_warning, satellite_debris_collision, satellite_pair_collision,
};
use crate::sim::state::Simulation;

/// Advance the simulation by one discrete step. No-op once the run is over.
pub fn tick(sim: &mut Simulation) {
    if sim.game_over {
        return;
    }
    sim.tick_count += 1;

    for sat in &mut sim.satellites {
        sat.update();
    }
    for deb in &mut sim.debris {
        deb.update();
    }

    // Difficulty ramp: spawn chance grows with the tick count up to a cap
    let chance = sim.tuning.spawn_chance(sim.tick_count);
    if sim.rng.random::<f32>() < chance {
        let deb = sim.field.generate(&mut sim.rng);
        log::debug!("spawned {} ({}) at {:?}", deb.name(), deb.size(), deb.body.pos);
        sim.debris.push(deb);
    }

    check_all_collisions(sim);
    cleanup_out_of_bounds(sim);

    // One point per surviving satellite per tick
    let active = sim.active_satellite_count();
    sim.score += active as u64;

    if active == 0 && sim.tick_count > sim.tuning.grace_period_ticks {
        sim.game_over = true;
        log::info!("all satellites lost at tick {}", sim.tick_count);
    }
}

/// Collision and proximity pass over snapshots of the currently-active
/// entities.
///
/// Both snapshots are taken once, up front, and are not re-filtered as
/// entities deactivate mid-pass. A satellite destroyed in the debris loop is
/// still examined by the pair loop below and can register a second collision
/// event and counter bump in the same tick. See DESIGN.md.
fn check_all_collisions(sim: &mut Simulation) {
    let sat_idx: Vec<usize> = (0..sim.satellites.len())
        .filter(|&i| sim.satellites[i].body.active)
        .collect();
    let deb_idx: Vec<usize> = (0..sim.debris.len())
        .filter(|&i| sim.debris[i].body.active)
        .collect();

    for &si in &sat_idx {
        for &di in &deb_idx {
            if satellite_debris_collision(&sim.satellites[si], &sim.debris[di]) {
                sim.satellites[si].body.deactivate();
                sim.debris[di].body.deactivate();
                sim.collisions += 1;
                let msg = format!(
                    "COLLISION: {} hit by {}!",
                    sim.satellites[si].name(),
                    sim.debris[di].name()
                );
                log::warn!("{msg}");
                sim.events.push(msg);
            } else if proximity_warning(
                &sim.satellites[si],
                &sim.debris[di].body,
                sim.tuning.warning_distance,
            ) {
                // No cooldown: repeats every tick while in range
                sim.events.push(format!(
                    "ALERT: {} close to {}",
                    sim.debris[di].name(),
                    sim.satellites[si].name()
                ));
            }
        }
    }

    for (k, &i) in sat_idx.iter().enumerate() {
        for &j in &sat_idx[k + 1..] {
            if satellite_pair_collision(&sim.satellites[i], &sim.satellites[j]) {
                sim.satellites[i].body.deactivate();
                sim.satellites[j].body.deactivate();
                sim.collisions += 2;
                let msg = format!(
                    "COLLISION: {} and {}!",
                    sim.satellites[i].name(),
                    sim.satellites[j].name()
                );
                log::warn!("{msg}");
                sim.events.push(msg);
            }
        }
    }
}

/// Drop debris that are destroyed or have drifted past the arena margin.
/// Satellites are never removed.
fn cleanup_out_of_bounds(sim: &mut Simulation) {
    sim.debris.retain(|d| {
        d.body.active
            && d.body.pos.x > -CLEANUP_MARGIN
            && d.body.pos.x < ARENA_WIDTH + CLEANUP_MARGIN
            && d.body.pos.y > -CLEANUP_MARGIN
            && d.body.pos.y < ARENA_HEIGHT + CLEANUP_MARGIN
    });
}
