//! Mapping from spectrum bands to cloud motion parameters.
//!
//! The ranges were tuned by ear against a single track. They are policy,
//! not derived values, so they live here as plain constants.

use crate::error::{Error, Result};

use super::spectrum::SPECTRUM_BANDS;

/// Tuned constants (compile-time defaults for `ParameterMapping`)
pub mod mapping_constants {
    /// Band driving the cloud radius
    pub const RADIUS_BAND: usize = 2;

    /// Band driving the offset velocity
    pub const VELOCITY_BAND: usize = 50;

    /// Radius input range (smoothed magnitude)
    pub const RADIUS_IN: (f32, f32) = (1.0, 3.0);

    /// Radius output range (pixels)
    pub const RADIUS_OUT: (f32, f32) = (400.0, 800.0);

    /// Velocity input range (smoothed magnitude)
    pub const VELOCITY_IN: (f32, f32) = (0.0, 0.1);

    /// Velocity output range (offset-units per second)
    pub const VELOCITY_OUT: (f32, f32) = (0.05, 0.5);
}

/// Linear range remap, optionally clamped to the output range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemapRange {
    pub in_min: f32,
    pub in_max: f32,
    pub out_min: f32,
    pub out_max: f32,
    /// Clamp to [out_min, out_max] instead of extrapolating
    pub clamp: bool,
}

impl RemapRange {
    pub const fn new(input: (f32, f32), output: (f32, f32), clamp: bool) -> Self {
        Self {
            in_min: input.0,
            in_max: input.1,
            out_min: output.0,
            out_max: output.1,
            clamp,
        }
    }

    /// Apply the remap to a single value
    pub fn apply(&self, value: f32) -> f32 {
        crate::mapping::remap(
            value,
            self.in_min,
            self.in_max,
            self.out_min,
            self.out_max,
            self.clamp,
        )
    }

    /// Reject non-finite bounds and ranges whose input span is zero
    pub fn validate(&self) -> Result<()> {
        let bounds = [self.in_min, self.in_max, self.out_min, self.out_max];
        if !bounds.iter().all(|b| b.is_finite()) {
            return Err(Error::InvalidParams(format!(
                "remap bounds must be finite, got [{}, {}] -> [{}, {}]",
                self.in_min, self.in_max, self.out_min, self.out_max
            )));
        }
        if (self.in_max - self.in_min).abs() < f32::EPSILON {
            return Err(Error::DegenerateRange {
                in_min: self.in_min,
                in_max: self.in_max,
            });
        }
        Ok(())
    }
}

/// Which bands feed which parameter, and how they are scaled
#[derive(Debug, Clone)]
pub struct ParameterMapping {
    /// Spectrum band index for the radius
    pub radius_band: usize,

    /// Spectrum band index for the velocity
    pub velocity_band: usize,

    /// Band magnitude → cloud radius (pixels), clamped
    pub radius: RemapRange,

    /// Band magnitude → offset velocity (units/s), extrapolates
    pub velocity: RemapRange,
}

impl Default for ParameterMapping {
    fn default() -> Self {
        use mapping_constants::*;
        Self {
            radius_band: RADIUS_BAND,
            velocity_band: VELOCITY_BAND,
            radius: RemapRange::new(RADIUS_IN, RADIUS_OUT, true),
            velocity: RemapRange::new(VELOCITY_IN, VELOCITY_OUT, false),
        }
    }
}

impl ParameterMapping {
    /// Validate band indices and both remap ranges
    pub fn validate(&self) -> Result<()> {
        for band in [self.radius_band, self.velocity_band] {
            if band >= SPECTRUM_BANDS {
                return Err(Error::InvalidParams(format!(
                    "band index {} out of range (0..{})",
                    band, SPECTRUM_BANDS
                )));
            }
        }
        self.radius.validate()?;
        self.velocity.validate()?;
        if !(self.radius.out_min >= 0.0 && self.radius.out_max >= 0.0) {
            return Err(Error::InvalidParams(
                "radius output range must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
