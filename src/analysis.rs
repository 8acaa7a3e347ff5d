//! Offline audio source: WAV decoding and per-frame spectrum analysis.
//!
//! Stands in for a live playback engine. For each video frame a
//! Hann-windowed FFT is taken around the frame time and the magnitudes of
//! the lower half of the bins become the raw spectrum.

use std::f32::consts::PI;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use rustfft::{num_complex::Complex, Fft, FftPlanner};

use crate::error::{Error, Result};
use crate::params::AnalysisConfig;

/// Mono audio clip held in memory
#[derive(Debug, Clone)]
pub struct AudioClip {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioClip {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Decode a WAV file, mixing all channels down to mono
    ///
    /// Integer formats are normalized to [-1, 1].
    pub fn from_wav(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = hound::WavReader::open(path)
            .map_err(|e| Error::Audio(format!("{}: {}", path.display(), e)))?;
        let spec = reader.spec();

        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| Error::Audio(e.to_string()))?,
            hound::SampleFormat::Int => {
                let scale = 1.0 / (1_i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 * scale))
                    .collect::<std::result::Result<_, _>>()
                    .map_err(|e| Error::Audio(e.to_string()))?
            }
        };

        let channels = spec.channels.max(1) as usize;
        let samples: Vec<f32> = interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect();

        info!(
            "Audio: {} ({} Hz, {} ch, {:.1}s)",
            path.display(),
            spec.sample_rate,
            spec.channels,
            samples.len() as f32 / spec.sample_rate as f32
        );

        Ok(Self::new(samples, spec.sample_rate))
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Clip length in seconds
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Hann window function for FFT analysis
pub fn hann_window(index: usize, size: usize) -> f32 {
    0.5 * (1.0 - ((2.0 * PI * index as f32) / (size as f32 - 1.0)).cos())
}

/// Computes magnitude spectra from an audio clip at arbitrary times
pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    buffer: Vec<Complex<f32>>,
    /// Maps raw FFT magnitude to amplitude (2 / Σwindow)
    normalization: f32,
    bands: usize,
}

impl SpectrumAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let size = config.fft_size;
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        let window: Vec<f32> = (0..size).map(|i| hann_window(i, size)).collect();
        let normalization = 2.0 / window.iter().sum::<f32>();

        debug!(
            "spectrum analyzer: fft size {}, {} bands",
            size,
            config.band_count()
        );

        Ok(Self {
            fft,
            window,
            buffer: vec![Complex::new(0.0, 0.0); size],
            normalization,
            bands: config.band_count(),
        })
    }

    /// Number of bands written per call
    pub fn band_count(&self) -> usize {
        self.bands
    }

    /// Write the spectrum of `clip` around `time_s` into `out`
    ///
    /// The window is centered on the time; samples before the start or past
    /// the end of the clip count as silence. Writes `min(out.len(), band_count)`
    /// bands.
    pub fn analyze(&mut self, clip: &AudioClip, time_s: f32, out: &mut [f32]) {
        let size = self.window.len();
        let center = (time_s * clip.sample_rate() as f32) as i64;
        let start = center - (size / 2) as i64;

        // Apply Hann window
        for (i, slot) in self.buffer.iter_mut().enumerate() {
            let index = start + i as i64;
            let sample = if index >= 0 {
                clip.samples().get(index as usize).copied().unwrap_or(0.0)
            } else {
                0.0
            };
            *slot = Complex::new(sample * self.window[i], 0.0);
        }

        // Perform FFT
        self.fft.process(&mut self.buffer);

        for (band, bin) in out.iter_mut().zip(&self.buffer[..self.bands]) {
            *band = bin.norm() * self.normalization;
        }
    }
}
