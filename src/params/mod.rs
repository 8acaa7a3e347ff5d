//! Parameter definitions with physical units and documented semantics.
//!
//! All tuning constants are extracted here with:
//! - Units (pixels, seconds, offset-units)
//! - Documented ranges and meanings
//! - A `validate()` per struct for the precondition checks

mod analysis;
mod cloud;
mod mapping;
mod render;
mod spectrum;

// Re-export all types
pub use analysis::AnalysisConfig;
pub use cloud::CloudParams;
pub use mapping::{mapping_constants, ParameterMapping, RemapRange};
pub use render::{RecordingConfig, RenderConfig};
pub use spectrum::{SmoothingParams, SPECTRUM_BANDS};
