//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{RecordingConfig, RenderConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "spectrocloud")]
#[command(about = "Render an audio-reactive particle cloud to PNG frames", long_about = None)]
pub struct Args {
    /// Input WAV file
    #[arg(value_name = "WAV")]
    pub input: PathBuf,

    /// Output directory for frames
    #[arg(long, short, value_name = "DIR", default_value = "recording")]
    pub output: PathBuf,

    /// Frame rate (FPS)
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Seconds to render (defaults to the whole clip)
    #[arg(long, value_name = "SECONDS")]
    pub seconds: Option<f32>,

    /// Frame width (pixels)
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Frame height (pixels)
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// RNG seed for the initial particle offsets (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the spatial grid for link search
    #[arg(long)]
    pub grid: bool,
}

impl Args {
    /// Render configuration from the frame size arguments
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            ..Default::default()
        }
    }

    /// Recording configuration, capped to the clip length
    pub fn recording_config(&self, clip_secs: f32) -> RecordingConfig {
        let duration = self
            .seconds
            .map_or(clip_secs, |secs| secs.min(clip_secs).max(0.0));
        RecordingConfig::new(duration, &self.output, self.fps.max(1))
    }
}
