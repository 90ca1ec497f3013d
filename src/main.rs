//! Headless console driver for the simulation core
//!
//! Stands in for the graphical control room: seeds the standard roster, runs
//! the tick loop, prints drained events, and emits a final stats line as
//! JSON.
//!
//! Usage: mission-control [seed] [max-ticks]

use glam::Vec2;
use mission_control::sim::{Satellite, Simulation, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(42);
    let max_ticks: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(600);

    log::info!("starting run: seed {seed}, up to {max_ticks} ticks");

    let mut sim = Simulation::new(seed);
    for sat in standard_roster() {
        sim.add_satellite(sat);
    }

    // The cadence is the caller's concern; headless, we run flat out
    for _ in 0..max_ticks {
        tick(&mut sim);
        for event in sim.pop_events() {
            println!("[tick {:>4}] {event}", sim.tick_count());
        }
        if sim.game_over() {
            println!("[tick {:>4}] mission over", sim.tick_count());
            break;
        }
    }

    println!("--- final roster ---");
    for sat in sim.satellites() {
        println!("{sat}");
    }
    for deb in sim.debris() {
        println!("{deb}");
    }

    match serde_json::to_string(&sim.stats()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("stats serialization failed: {e}"),
    }
}

/// The standard four-satellite roster.
fn standard_roster() -> Vec<Satellite> {
    vec![
        Satellite::new("ISS", Vec2::new(200.0, 300.0), 1.5, 45.0, 80.0),
        Satellite::new("Hubble", Vec2::new(500.0, 150.0), 1.0, 180.0, 60.0),
        Satellite::new("Sentinel", Vec2::new(350.0, 450.0), 2.0, 90.0, 100.0),
        Satellite::new("GPS-VII", Vec2::new(600.0, 350.0), 0.8, 270.0, 70.0),
    ]
}
