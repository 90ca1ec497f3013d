//! Simulation state and its control surface
//!
//! The `Simulation` exclusively owns every entity collection and counter.
//! External readers take snapshots between ticks; in a concurrent setting the
//! whole thing must sit behind a single exclusive-access boundary.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::sim::entity::{Debris, Satellite};
use crate::sim::field::DebrisField;
use crate::tuning::Tuning;

/// Counter snapshot handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimStats {
    pub tick: u64,
    pub score: u64,
    pub active_satellites: usize,
    pub collisions: u32,
    pub deorbited: u32,
    pub debris_in_zone: usize,
}

/// The whole simulation: entities, counters, event queue, seeded RNG.
///
/// Satellites keep insertion order and are never removed, active or not;
/// debris are removed by the per-tick cleanup once inactive or out of bounds.
#[derive(Debug)]
pub struct Simulation {
    /// Run seed, kept for reproducibility reporting
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) field: DebrisField,
    pub(crate) satellites: Vec<Satellite>,
    pub(crate) debris: Vec<Debris>,
    pub(crate) tick_count: u64,
    pub(crate) score: u64,
    pub(crate) collisions: u32,
    pub(crate) deorbited: u32,
    pub(crate) game_over: bool,
    pub(crate) events: Vec<String>,
    pub tuning: Tuning,
}

impl Simulation {
    /// Create an empty simulation with default tuning.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            field: DebrisField::new(ARENA_WIDTH, ARENA_HEIGHT),
            satellites: Vec::new(),
            debris: Vec::new(),
            tick_count: 0,
            score: 0,
            collisions: 0,
            deorbited: 0,
            game_over: false,
            events: Vec::new(),
            tuning,
        }
    }

    /// Seed the initial roster. Meant to be called before ticking begins,
    /// though nothing enforces that.
    pub fn add_satellite(&mut self, sat: Satellite) {
        log::info!("tracking satellite {}", sat.name());
        self.satellites.push(sat);
    }

    /// Ordered read-only view of every satellite ever added.
    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    /// Ordered read-only view of debris currently in the zone.
    pub fn debris(&self) -> &[Debris] {
        &self.debris
    }

    /// First satellite with the given name, for the control layer's
    /// heading/speed commands.
    pub fn satellite_mut(&mut self, name: &str) -> Option<&mut Satellite> {
        self.satellites.iter_mut().find(|s| s.name() == name)
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub(crate) fn active_satellite_count(&self) -> usize {
        self.satellites.iter().filter(|s| s.body.active).count()
    }

    /// Drain the event queue in FIFO order, leaving it empty.
    pub fn pop_events(&mut self) -> Vec<String> {
        std::mem::take(&mut self.events)
    }

    /// Attempt a controlled deorbit of the first *active* satellite with the
    /// given name. An unknown or inactive name is a silent failure.
    pub fn deorbit_satellite(&mut self, name: &str) -> bool {
        let Some(idx) = self
            .satellites
            .iter()
            .position(|s| s.name() == name && s.body.active)
        else {
            return false;
        };

        if self.satellites[idx].deorbit() {
            // Tallied under `collisions`; `deorbited` is reported in stats
            // but never incremented anywhere. See DESIGN.md.
            self.collisions += 1;
            log::info!("{name} deorbited");
            self.events.push(format!("{name} deorbited successfully!"));
            true
        } else {
            self.events
                .push(format!("{name}: insufficient fuel to deorbit"));
            false
        }
    }

    /// Current counters.
    pub fn stats(&self) -> SimStats {
        SimStats {
            tick: self.tick_count,
            score: self.score,
            active_satellites: self.active_satellite_count(),
            collisions: self.collisions,
            deorbited: self.deorbited,
            debris_in_zone: self.debris.len(),
        }
    }
}
