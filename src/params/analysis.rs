//! Offline spectrum analysis configuration.

use crate::error::{Error, Result};

use super::spectrum::SPECTRUM_BANDS;

/// FFT analysis configuration for the file-driven audio source
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// FFT window size (must be power of 2)
    /// Half of it becomes the band count handed to the visualizer
    pub fft_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            fft_size: SPECTRUM_BANDS * 2,
        }
    }
}

impl AnalysisConfig {
    /// Number of magnitude bands produced per frame
    pub fn band_count(&self) -> usize {
        self.fft_size / 2
    }

    /// Validate configuration (FFT size must be power of 2 and cover every band)
    pub fn validate(&self) -> Result<()> {
        if !self.fft_size.is_power_of_two() {
            return Err(Error::InvalidParams(format!(
                "FFT size must be power of 2, got {}",
                self.fft_size
            )));
        }
        if self.band_count() < SPECTRUM_BANDS {
            return Err(Error::InvalidParams(format!(
                "FFT size {} yields {} bands, need {}",
                self.fft_size,
                self.band_count(),
                SPECTRUM_BANDS
            )));
        }
        Ok(())
    }
}
