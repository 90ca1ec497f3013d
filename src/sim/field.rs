//! Procedural debris generation along the arena edges

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::sim::entity::{Debris, DebrisSize};

/// Name pool for generated debris; uniqueness comes from the counter suffix.
const DEBRIS_NAMES: [&str; 10] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
];

/// Spawns debris at a random arena edge with an inward-biased heading.
#[derive(Debug, Clone)]
pub struct DebrisField {
    width: f32,
    height: f32,
    counter: u64,
}

impl DebrisField {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            counter: 0,
        }
    }

    /// Number of debris generated so far
    pub fn spawned(&self) -> u64 {
        self.counter
    }

    /// Generate one debris on a uniformly chosen edge.
    ///
    /// Heading ranges per edge point into the arena with up to a few tens of
    /// degrees of spread; sizes are weighted 60/30/10 small/medium/large and
    /// speed is uniform in [1, 3).
    pub fn generate(&mut self, rng: &mut Pcg32) -> Debris {
        let (pos, heading) = match rng.random_range(0..4u8) {
            // Top edge
            0 => (
                Vec2::new(rng.random_range(0.0..self.width), 0.0),
                rng.random_range(150.0..210.0),
            ),
            // Bottom edge
            1 => (
                Vec2::new(rng.random_range(0.0..self.width), self.height),
                rng.random_range(-30.0..30.0),
            ),
            // Left edge
            2 => (
                Vec2::new(0.0, rng.random_range(0.0..self.height)),
                rng.random_range(-45.0..45.0),
            ),
            // Right edge
            _ => (
                Vec2::new(self.width, rng.random_range(0.0..self.height)),
                rng.random_range(135.0..225.0),
            ),
        };

        let size = roll_size(rng);
        let speed = rng.random_range(1.0..3.0);
        let name = format!(
            "{}-{}",
            DEBRIS_NAMES[rng.random_range(0..DEBRIS_NAMES.len())],
            self.counter
        );
        self.counter += 1;

        Debris::new(name, pos, speed, heading, size)
    }
}

/// Weighted size draw: small 60%, medium 30%, large 10%
fn roll_size(rng: &mut Pcg32) -> DebrisSize {
    let roll: f32 = rng.random();
    if roll < 0.6 {
        DebrisSize::Small
    } else if roll < 0.9 {
        DebrisSize::Medium
    } else {
        DebrisSize::Large
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    #[test]
    fn debris_spawn_on_an_edge_heading_inward() {
        let mut field = DebrisField::new(W, H);
        let mut rng = Pcg32::seed_from_u64(99);

        for _ in 0..500 {
            let deb = field.generate(&mut rng);
            let pos = deb.body.pos;
            let h = deb.body.heading();

            let on_top = pos.y == 0.0 && (0.0..W).contains(&pos.x);
            let on_bottom = pos.y == H && (0.0..W).contains(&pos.x);
            let on_left = pos.x == 0.0 && (0.0..H).contains(&pos.y);
            let on_right = pos.x == W && (0.0..H).contains(&pos.y);
            assert!(
                on_top || on_bottom || on_left || on_right,
                "debris off-edge at {pos:?}"
            );

            // Headings are normalized to [0, 360); bottom/left ranges wrap
            if on_top {
                assert!((150.0..210.0).contains(&h), "top heading {h}");
            } else if on_bottom {
                assert!(h < 30.0 || h >= 330.0, "bottom heading {h}");
            } else if on_left {
                assert!(h < 45.0 || h >= 315.0, "left heading {h}");
            } else {
                assert!((135.0..225.0).contains(&h), "right heading {h}");
            }

            assert!((1.0..3.0).contains(&deb.body.speed));
            assert!(deb.body.active);
        }
    }

    #[test]
    fn names_are_unique_even_with_pool_repeats() {
        let mut field = DebrisField::new(W, H);
        let mut rng = Pcg32::seed_from_u64(7);

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let deb = field.generate(&mut rng);
            assert!(seen.insert(deb.name().to_string()), "dup {}", deb.name());
        }
        assert_eq!(field.spawned(), 200);
    }

    #[test]
    fn size_weights_roughly_hold() {
        let mut field = DebrisField::new(W, H);
        let mut rng = Pcg32::seed_from_u64(3);

        let mut counts = [0u32; 3];
        for _ in 0..2000 {
            match field.generate(&mut rng).size() {
                DebrisSize::Small => counts[0] += 1,
                DebrisSize::Medium => counts[1] += 1,
                DebrisSize::Large => counts[2] += 1,
            }
        }
        // Generous bands; this is a sanity check, not a statistics test
        assert!((1000..1400).contains(&counts[0]), "small {}", counts[0]);
        assert!((450..750).contains(&counts[1]), "medium {}", counts[1]);
        assert!((100..320).contains(&counts[2]), "large {}", counts[2]);
    }

    #[test]
    fn same_seed_same_debris() {
        let mut f1 = DebrisField::new(W, H);
        let mut f2 = DebrisField::new(W, H);
        let mut r1 = Pcg32::seed_from_u64(1234);
        let mut r2 = Pcg32::seed_from_u64(1234);

        for _ in 0..50 {
            let a = f1.generate(&mut r1);
            let b = f2.generate(&mut r2);
            assert_eq!(a.name(), b.name());
            assert_eq!(a.body.pos, b.body.pos);
            assert_eq!(a.body.heading(), b.body.heading());
            assert_eq!(a.size(), b.size());
        }
    }
}
