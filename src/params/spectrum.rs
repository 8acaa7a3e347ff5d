//! Spectrum smoothing constants.

use crate::error::{Error, Result};

/// Number of frequency bands requested from the audio collaborator
pub const SPECTRUM_BANDS: usize = 256;

/// Peak-hold smoothing applied to the raw spectrum every frame
#[derive(Debug, Clone)]
pub struct SmoothingParams {
    /// Per-frame multiplicative decay (dimensionless, 0..1)
    /// Formula: smoothed = max(smoothed * decay, raw)
    pub decay: f32,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self { decay: 0.97 }
    }
}

impl SmoothingParams {
    /// Decay must stay in [0, 1] or peaks would grow without input
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.decay) {
            return Err(Error::InvalidParams(format!(
                "decay must be in [0, 1], got {}",
                self.decay
            )));
        }
        Ok(())
    }
}
