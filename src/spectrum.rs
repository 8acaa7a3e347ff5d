//! Peak-hold spectrum smoothing.
//!
//! Each band falls geometrically between frames and jumps up immediately
//! when the raw input exceeds it, giving slowly falling peaks.

use crate::error::{Error, Result};
use crate::params::{SmoothingParams, SPECTRUM_BANDS};

/// Smoothed per-band magnitudes carried from frame to frame
#[derive(Debug, Clone)]
pub struct SpectrumSmoother {
    bands: [f32; SPECTRUM_BANDS],
    decay: f32,
}

impl Default for SpectrumSmoother {
    fn default() -> Self {
        Self::new(&SmoothingParams::default())
    }
}

impl SpectrumSmoother {
    /// Create a smoother with every band at zero
    pub fn new(params: &SmoothingParams) -> Self {
        Self {
            bands: [0.0; SPECTRUM_BANDS],
            decay: params.decay,
        }
    }

    /// Fold one raw spectrum snapshot into the smoothed state
    ///
    /// `raw` is only read for the duration of the call. Extra trailing bands
    /// are ignored; a short snapshot is rejected before any band changes.
    pub fn update(&mut self, raw: &[f32]) -> Result<()> {
        if raw.len() < SPECTRUM_BANDS {
            return Err(Error::SpectrumTooShort {
                expected: SPECTRUM_BANDS,
                actual: raw.len(),
            });
        }

        for (band, &value) in self.bands.iter_mut().zip(raw) {
            let decayed = *band * self.decay;
            // max(decayed, raw) with the decayed value kept on unordered input
            *band = if decayed < value { value } else { decayed };
        }
        Ok(())
    }

    /// All smoothed bands
    pub fn bands(&self) -> &[f32] {
        &self.bands
    }

    /// Smoothed magnitude of a single band
    pub fn band(&self, index: usize) -> f32 {
        self.bands[index]
    }

    /// Zero every band
    pub fn reset(&mut self) {
        self.bands = [0.0; SPECTRUM_BANDS];
    }
}
