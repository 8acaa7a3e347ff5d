//! Rendering and recording configuration.

use std::path::PathBuf;

/// Output surface configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Frame width (pixels)
    pub width: u32,

    /// Frame height (pixels)
    pub height: u32,

    /// Background color (RGB)
    pub background: [u8; 3],

    /// Dot and line color (RGB)
    pub foreground: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            background: [0, 0, 0],
            foreground: [255, 255, 255],
        }
    }
}

impl RenderConfig {
    /// Center of the viewport, used as the drawing origin
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32, output_dir: impl Into<PathBuf>, fps: u32) -> Self {
        Self {
            duration_secs,
            output_dir: output_dir.into(),
            fps,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil().max(0.0) as usize
    }

    /// Timestamp of a frame (seconds)
    pub fn frame_time(&self, frame: usize) -> f32 {
        frame as f32 / self.fps as f32
    }

    /// Frame file path
    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.output_dir.join(format!("frame_{:05}.png", frame))
    }
}
