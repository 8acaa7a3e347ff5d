//! Per-frame pipeline owning all visualizer state.
//!
//! raw spectrum → smoother → mapper → particle field → proximity renderer

use glam::Vec2;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::FrameClock;
use crate::cloud::ParticleField;
use crate::error::Result;
use crate::mapping::{MotionParameters, ParameterMapper};
use crate::params::{CloudParams, ParameterMapping, RenderConfig, SmoothingParams};
use crate::proximity::{Canvas, ProximityRenderer};
use crate::spectrum::SpectrumSmoother;

/// Complete visualizer state, updated once and drawn once per frame
pub struct Visualizer {
    smoother: SpectrumSmoother,
    mapper: ParameterMapper,
    field: ParticleField,
    clock: FrameClock,
    renderer: ProximityRenderer,
    link_distance: f32,
    last_params: Option<MotionParameters>,
}

impl Visualizer {
    /// Create a visualizer, validating every parameter set
    pub fn new<R: Rng>(
        smoothing: &SmoothingParams,
        mapping: ParameterMapping,
        cloud: &CloudParams,
        render: &RenderConfig,
        rng: &mut R,
    ) -> Result<Self> {
        smoothing.validate()?;
        cloud.validate()?;
        let mapper = ParameterMapper::new(mapping)?;

        debug!(
            "visualizer: decay {}, bands {}/{}, link distance {}",
            smoothing.decay,
            mapper.mapping().radius_band,
            mapper.mapping().velocity_band,
            cloud.link_distance
        );

        Ok(Self {
            smoother: SpectrumSmoother::new(smoothing),
            mapper,
            field: ParticleField::new(cloud, rng)?,
            clock: FrameClock::new(cloud.max_dt_s),
            renderer: ProximityRenderer::new(cloud, render),
            link_distance: cloud.link_distance,
            last_params: None,
        })
    }

    /// Default tuning with a seeded cloud
    pub fn with_seed(seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(
            &SmoothingParams::default(),
            ParameterMapping::default(),
            &CloudParams::default(),
            &RenderConfig::default(),
            &mut rng,
        )
    }

    /// Use a specific renderer (e.g. another link strategy)
    pub fn with_renderer(mut self, renderer: ProximityRenderer) -> Self {
        self.link_distance = renderer.link_distance();
        self.renderer = renderer;
        self
    }

    /// Advance one frame
    ///
    /// `raw_spectrum` is borrowed for this call only. `now_s` is monotonic
    /// elapsed time in seconds. A short spectrum fails before any state
    /// changes, including the clock.
    pub fn update(&mut self, raw_spectrum: &[f32], now_s: f32) -> Result<MotionParameters> {
        self.smoother.update(raw_spectrum)?;

        let dt = self.clock.tick(now_s);
        let params = self.mapper.compute(self.smoother.bands());
        self.field.advance(dt, params.radius, params.velocity);

        trace!(
            "frame t={:.3}s dt={:.4}s radius={:.1} velocity={:.3}",
            now_s,
            dt,
            params.radius,
            params.velocity
        );
        self.last_params = Some(params);
        Ok(params)
    }

    /// Draw the cloud centered in the viewport
    pub fn draw<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        viewport: &RenderConfig,
    ) -> Result<usize> {
        self.renderer.draw(
            canvas,
            self.field.positions(),
            viewport.center(),
            self.link_distance,
        )
    }

    pub fn spectrum(&self) -> &[f32] {
        self.smoother.bands()
    }

    pub fn positions(&self) -> &[Vec2] {
        self.field.positions()
    }

    pub fn offsets(&self) -> &[Vec2] {
        self.field.offsets()
    }

    /// Parameters computed by the most recent update
    pub fn last_params(&self) -> Option<MotionParameters> {
        self.last_params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::params::SPECTRUM_BANDS;
    use crate::proximity::tests::RecordingCanvas;

    #[test]
    fn test_zero_spectrum_frame() {
        let mut vis = Visualizer::with_seed(1).unwrap();
        let silence = [0.0; SPECTRUM_BANDS];

        let params = vis.update(&silence, 0.0).unwrap();
        assert_eq!(params.radius, 400.0);
        assert_eq!(params.velocity, 0.05);

        // dt = 0 again: nothing moves
        let before = vis.positions().to_vec();
        vis.update(&silence, 0.0).unwrap();
        assert_eq!(vis.positions(), &before[..]);
    }

    #[test]
    fn test_short_spectrum_leaves_state_untouched() {
        let mut vis = Visualizer::with_seed(2).unwrap();
        vis.update(&[0.0; SPECTRUM_BANDS], 0.0).unwrap();
        let offsets = vis.offsets().to_vec();

        let err = vis.update(&[1.0; 100], 0.05).unwrap_err();
        assert_eq!(
            err,
            Error::SpectrumTooShort {
                expected: SPECTRUM_BANDS,
                actual: 100
            }
        );
        assert_eq!(vis.offsets(), &offsets[..]);
        assert!(vis.spectrum().iter().all(|&b| b == 0.0));
    }

    #[test]
    fn test_loud_bands_drive_parameters() {
        let mut vis = Visualizer::with_seed(3).unwrap();
        let mut raw = [0.0; SPECTRUM_BANDS];
        raw[2] = 10.0;
        raw[50] = 0.2;

        let params = vis.update(&raw, 0.016).unwrap();
        assert_eq!(params.radius, 800.0);
        assert!((params.velocity - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_nan_constants_are_errors() {
        let mut rng = StdRng::seed_from_u64(0);
        let render = RenderConfig::default();

        for cloud in [
            CloudParams {
                max_dt_s: f32::NAN,
                ..Default::default()
            },
            CloudParams {
                offset_range: f32::NAN,
                ..Default::default()
            },
        ] {
            let result = Visualizer::new(
                &SmoothingParams::default(),
                ParameterMapping::default(),
                &cloud,
                &render,
                &mut rng,
            );
            assert!(matches!(result, Err(Error::InvalidParams(_))));
        }

        let mapping = ParameterMapping {
            radius: crate::params::RemapRange::new((1.0, 3.0), (f32::NAN, 800.0), true),
            ..Default::default()
        };
        let result = Visualizer::new(
            &SmoothingParams::default(),
            mapping,
            &CloudParams::default(),
            &render,
            &mut rng,
        );
        assert!(matches!(result, Err(Error::InvalidParams(_))));
    }

    #[test]
    fn test_hitch_is_bounded() {
        let mut vis = Visualizer::with_seed(4).unwrap();
        let mut raw = [0.0; SPECTRUM_BANDS];
        raw[50] = 0.1;
        vis.update(&raw, 0.0).unwrap();
        let before = vis.offsets().to_vec();

        // Ten seconds of stall advance the offsets by at most velocity * 0.1
        vis.update(&raw, 10.0).unwrap();
        let velocity = vis.last_params().unwrap().velocity;
        for (old, new) in before.iter().zip(vis.offsets()) {
            assert!((new.x - old.x) <= velocity * 0.1 + 1e-3);
        }
    }

    #[test]
    fn test_draw_centers_cloud() {
        let mut vis = Visualizer::with_seed(5).unwrap();
        vis.update(&[0.0; SPECTRUM_BANDS], 0.0).unwrap();

        let mut canvas = RecordingCanvas::default();
        let viewport = RenderConfig {
            width: 1000,
            height: 800,
            ..Default::default()
        };
        vis.draw(&mut canvas, &viewport).unwrap();

        assert_eq!(canvas.circles.len(), CloudParams::default().point_count);
        for (center, radius) in &canvas.circles {
            assert_eq!(*radius, 2.0);
            assert!((center.x - 500.0).abs() <= 400.0);
            assert!((center.y - 400.0).abs() <= 400.0);
        }
    }
}
