//! Noise-driven particle cloud.
//!
//! Every particle owns a pair of noise offsets that only ever move forward.
//! Positions are not integrated: each update resamples the noise at the
//! current offsets and scales the result by the cloud radius.

use glam::Vec2;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::noise::coherent_noise_1d;
use crate::params::CloudParams;

/// Particle offsets and the positions derived from them
#[derive(Debug, Clone)]
pub struct ParticleField {
    offsets: Vec<Vec2>,
    positions: Vec<Vec2>,
}

impl ParticleField {
    /// Create a field with offsets drawn uniformly from [0, offset_range)
    pub fn new<R: Rng>(params: &CloudParams, rng: &mut R) -> Result<Self> {
        params.validate()?;

        let offsets: Vec<Vec2> = (0..params.point_count)
            .map(|_| {
                Vec2::new(
                    rng.gen_range(0.0..params.offset_range),
                    rng.gen_range(0.0..params.offset_range),
                )
            })
            .collect();

        let mut field = Self {
            positions: vec![Vec2::ZERO; offsets.len()],
            offsets,
        };
        field.resample(params.initial_radius);

        debug!(
            "particle field created: {} points, offsets in [0, {})",
            field.len(),
            params.offset_range
        );
        Ok(field)
    }

    /// Reproducible field from a seed
    pub fn with_seed(params: &CloudParams, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(params, &mut rng)
    }

    /// Move every offset forward by `velocity * dt` and recompute positions
    ///
    /// Both axes get the same delta. `dt` is expected to be clamped already.
    pub fn advance(&mut self, dt: f32, radius: f32, velocity: f32) {
        let delta = velocity * dt;
        for offset in &mut self.offsets {
            offset.x += delta;
            offset.y += delta;
        }
        self.resample(radius);
    }

    fn resample(&mut self, radius: f32) {
        for (position, offset) in self.positions.iter_mut().zip(&self.offsets) {
            position.x = coherent_noise_1d(offset.x) * radius;
            position.y = coherent_noise_1d(offset.y) * radius;
        }
    }

    /// Current particle positions, relative to the cloud center
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Current noise offsets
    pub fn offsets(&self) -> &[Vec2] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_invalid_params_rejected() {
        let params = CloudParams {
            offset_range: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            ParticleField::with_seed(&params, 1),
            Err(Error::InvalidParams(_))
        ));
    }

    #[test]
    fn test_field_creation() {
        let params = CloudParams::default();
        let field = ParticleField::with_seed(&params, 7).unwrap();

        assert_eq!(field.len(), 300);
        assert_eq!(field.positions().len(), 300);
        for offset in field.offsets() {
            assert!((0.0..1000.0).contains(&offset.x));
            assert!((0.0..1000.0).contains(&offset.y));
        }
    }

    #[test]
    fn test_axes_are_independent_at_creation() {
        let field = ParticleField::with_seed(&CloudParams::default(), 1).unwrap();
        let same = field.offsets().iter().filter(|o| o.x == o.y).count();
        assert_eq!(same, 0);
    }

    #[test]
    fn test_same_seed_same_cloud() {
        let params = CloudParams::default();
        let a = ParticleField::with_seed(&params, 42).unwrap();
        let b = ParticleField::with_seed(&params, 42).unwrap();
        assert_eq!(a.offsets(), b.offsets());
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn test_advance_moves_both_axes_equally() {
        let mut field = ParticleField::with_seed(&CloudParams::default(), 3).unwrap();
        let before = field.offsets().to_vec();

        field.advance(0.1, 600.0, 0.5);

        for (old, new) in before.iter().zip(field.offsets()) {
            let expected_x = old.x + 0.5 * 0.1;
            let expected_y = old.y + 0.5 * 0.1;
            assert_eq!(new.x, expected_x);
            assert_eq!(new.y, expected_y);
        }
    }

    #[test]
    fn test_offsets_never_decrease() {
        let mut field = ParticleField::with_seed(&CloudParams::default(), 11).unwrap();
        let start = field.offsets().to_vec();

        for frame in 0..100 {
            let dt = (frame % 7) as f32 * 0.015;
            let velocity = (frame % 5) as f32 * 0.1;
            field.advance(dt, 500.0, velocity);
        }

        for (old, new) in start.iter().zip(field.offsets()) {
            assert!(new.x >= old.x);
            assert!(new.y >= old.y);
        }
    }

    #[test]
    fn test_positions_scale_with_radius() {
        let mut field = ParticleField::with_seed(&CloudParams::default(), 5).unwrap();

        field.advance(0.0, 400.0, 0.05);
        let small = field.positions().to_vec();
        field.advance(0.0, 800.0, 0.05);

        for (s, l) in small.iter().zip(field.positions()) {
            assert_eq!(l.x, s.x * 2.0);
            assert_eq!(l.y, s.y * 2.0);
            assert!(l.x.abs() <= 800.0 && l.y.abs() <= 800.0);
        }
    }

    #[test]
    fn test_zero_dt_keeps_positions() {
        let mut field = ParticleField::with_seed(&CloudParams::default(), 9).unwrap();
        field.advance(0.0, 400.0, 0.05);
        let before = field.positions().to_vec();

        field.advance(0.0, 400.0, 0.05);

        assert_eq!(field.positions(), &before[..]);
    }
}
