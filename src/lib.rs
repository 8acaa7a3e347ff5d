//! Spectrocloud library - Audio-reactive particle cloud

pub mod analysis;
pub mod cli;
pub mod clock;
pub mod cloud;
pub mod error;
pub mod mapping;
pub mod noise;
pub mod params;
pub mod proximity;
pub mod raster;
pub mod spectrum;
pub mod visualizer;

pub use error::{Error, Result};
pub use visualizer::Visualizer;
