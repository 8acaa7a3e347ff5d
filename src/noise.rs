//! Coherent 1D noise for particle motion.
//!
//! Perlin gradient noise sampled along a fixed lane of the 2D field, so the
//! output is continuous in `x` and never locked to zero at integer inputs.

use std::sync::OnceLock;

use noise::{NoiseFn, Perlin};

/// Permutation seed shared by every sampler in the process
pub const NOISE_SEED: u32 = 0;

/// Fixed second coordinate for the 1D lane (off the lattice)
const LANE_Y: f64 = 0.5;

/// Seeded 1D noise sampler
pub struct CoherentNoise {
    perlin: Perlin,
}

impl CoherentNoise {
    /// Create new noise sampler with seed
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Sample noise at `x`
    ///
    /// Returns value in range [-1, 1]
    pub fn sample(&self, x: f32) -> f32 {
        let value = self.perlin.get([x as f64, LANE_Y]) as f32;
        value.clamp(-1.0, 1.0)
    }
}

/// Process-wide signed noise, a pure function of `x`
pub fn coherent_noise_1d(x: f32) -> f32 {
    static SAMPLER: OnceLock<CoherentNoise> = OnceLock::new();
    SAMPLER
        .get_or_init(|| CoherentNoise::new(NOISE_SEED))
        .sample(x)
}
