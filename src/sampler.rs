//! Random sampling of integers and map positions
//!
//! All randomness in the engine flows through one seeded [`Sampler`], so a
//! recorded match replays deterministically when the seed is known.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::hex::Position;

/// Seeded random source bounded by the map radius
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: ChaCha8Rng,
    map_radius: i32,
}

impl Sampler {
    pub fn new(rng: ChaCha8Rng, map_radius: i32) -> Self {
        Self { rng, map_radius }
    }

    pub fn with_seed(seed: u64, map_radius: i32) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed), map_radius)
    }

    pub fn from_entropy(map_radius: i32) -> Self {
        Self::new(ChaCha8Rng::from_entropy(), map_radius)
    }

    pub fn map_radius(&self) -> i32 {
        self.map_radius
    }

    /// Uniform integer in `[min, max]`. Returns `min` when the range is empty.
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Uniform index into a collection of `len` items (`len` must be non-zero)
    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Uniform over x, then uniform over the y values x leaves on-map.
    ///
    /// Drawing x and y independently would produce off-map points and skew
    /// towards the narrow ends of the hexagon.
    pub fn random_map_position(&mut self) -> Position {
        let s = self.map_radius;
        let x = self.random_int(-s, s);
        let y_min = (-s).max(-(x + s));
        let y_max = s.min(-(x - s));
        let y = self.random_int(y_min, y_max);
        Position::new(x, y)
    }

    /// Perturb each axis of `center` by up to `margin`, clamped to the map
    /// radius per axis.
    ///
    /// The combined `x + y` bound is not re-enforced, so near the slanted
    /// edges the result can sit just outside the hexagon.
    pub fn position_with_error_margin(&mut self, center: Position, margin: i32) -> Position {
        let s = self.map_radius;
        let x = self.random_int(
            center.x.saturating_sub(margin).clamp(-s, s),
            center.x.saturating_add(margin).clamp(-s, s),
        );
        let y = self.random_int(
            center.y.saturating_sub(margin).clamp(-s, s),
            center.y.saturating_add(margin).clamp(-s, s),
        );
        Position::new(x, y)
    }
}
