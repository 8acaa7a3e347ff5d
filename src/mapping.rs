//! Spectrum band → motion parameter mapping.

use crate::error::Result;
use crate::params::ParameterMapping;

/// Linearly remap `value` from [in_min, in_max] to [out_min, out_max]
///
/// With `clamp` the result is held inside the output range (either order
/// of bounds); without it the result extrapolates. A zero-width input range
/// yields `out_min`.
pub fn remap(
    value: f32,
    in_min: f32,
    in_max: f32,
    out_min: f32,
    out_max: f32,
    clamp: bool,
) -> f32 {
    if (in_min - in_max).abs() < f32::EPSILON {
        return out_min;
    }

    let out = out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min);

    if !clamp {
        return out;
    }
    // min/max instead of clamp: never panics on a NaN bound
    let (lo, hi) = if out_max < out_min {
        (out_max, out_min)
    } else {
        (out_min, out_max)
    };
    out.max(lo).min(hi)
}

/// Cloud motion parameters derived from one smoothed spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParameters {
    /// Cloud radius (pixels)
    pub radius: f32,
    /// Noise offset velocity (offset-units per second)
    pub velocity: f32,
}

/// Maps two fixed spectrum bands onto radius and velocity
#[derive(Debug, Clone, Default)]
pub struct ParameterMapper {
    mapping: ParameterMapping,
}

impl ParameterMapper {
    /// Create a mapper, rejecting out-of-range bands and degenerate ranges
    pub fn new(mapping: ParameterMapping) -> Result<Self> {
        mapping.validate()?;
        Ok(Self { mapping })
    }

    pub fn mapping(&self) -> &ParameterMapping {
        &self.mapping
    }

    /// Compute motion parameters from a smoothed spectrum
    ///
    /// The spectrum must cover both configured bands.
    pub fn compute(&self, spectrum: &[f32]) -> MotionParameters {
        let radius = self.mapping.radius.apply(spectrum[self.mapping.radius_band]);
        let velocity = self
            .mapping
            .velocity
            .apply(spectrum[self.mapping.velocity_band]);

        MotionParameters { radius, velocity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{RemapRange, SPECTRUM_BANDS};
    use proptest::prelude::*;

    #[test]
    fn test_clamped_radius_remap() {
        let radius = |x| remap(x, 1.0, 3.0, 400.0, 800.0, true);

        assert_eq!(radius(2.0), 600.0);
        assert_eq!(radius(1.0), 400.0);
        assert_eq!(radius(3.0), 800.0);
        assert_eq!(radius(0.0), 400.0);
        assert_eq!(radius(-10.0), 400.0);
        assert_eq!(radius(7.5), 800.0);
    }

    #[test]
    fn test_unclamped_velocity_remap_extrapolates() {
        let velocity = remap(0.2, 0.0, 0.1, 0.05, 0.5, false);
        assert!((velocity - 0.95).abs() < 1e-6, "got {}", velocity);
        assert!(velocity > 0.5);
    }

    #[test]
    fn test_reverse_output_range_clamps() {
        assert_eq!(remap(-1.0, 0.0, 1.0, 10.0, 0.0, true), 10.0);
        assert_eq!(remap(2.0, 0.0, 1.0, 10.0, 0.0, true), 0.0);
        assert_eq!(remap(0.5, 0.0, 1.0, 10.0, 0.0, true), 5.0);
    }

    #[test]
    fn test_nan_output_bound_does_not_panic() {
        assert_eq!(remap(5.0, 1.0, 3.0, f32::NAN, 800.0, true), 800.0);
    }

    #[test]
    fn test_degenerate_input_range_returns_out_min() {
        assert_eq!(remap(5.0, 2.0, 2.0, 10.0, 20.0, false), 10.0);
    }

    #[test]
    fn test_zero_spectrum_parameters() {
        let mapper = ParameterMapper::default();
        let params = mapper.compute(&[0.0; SPECTRUM_BANDS]);

        assert_eq!(params.radius, 400.0);
        assert_eq!(params.velocity, 0.05);
    }

    #[test]
    fn test_mapper_reads_configured_bands() {
        let mapper = ParameterMapper::default();
        let mut spectrum = [0.0; SPECTRUM_BANDS];
        spectrum[2] = 2.0;
        spectrum[50] = 0.1;
        let params = mapper.compute(&spectrum);

        assert_eq!(params.radius, 600.0);
        assert!((params.velocity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_new_rejects_degenerate_mapping() {
        let mapping = ParameterMapping {
            radius: RemapRange::new((1.0, 1.0), (400.0, 800.0), true),
            ..Default::default()
        };
        assert!(ParameterMapper::new(mapping).is_err());
    }

    proptest! {
        #[test]
        fn prop_clamped_remap_stays_in_range(x in -100.0f32..100.0) {
            let r = remap(x, 1.0, 3.0, 400.0, 800.0, true);
            prop_assert!((400.0..=800.0).contains(&r));
        }

        #[test]
        fn prop_remap_is_monotonic(a in -10.0f32..10.0, b in -10.0f32..10.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let f = |x| remap(x, 0.0, 0.1, 0.05, 0.5, false);
            prop_assert!(f(lo) <= f(hi));
        }
    }
}
