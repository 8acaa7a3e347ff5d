//! Spectrocloud - audio-reactive particle cloud
//!
//! Points drift on coherent noise; the bass band swells the cloud, a
//! mid band speeds it up, and nearby points are joined by lines.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use spectrocloud::analysis::{AudioClip, SpectrumAnalyzer};
use spectrocloud::cli::Args;
use spectrocloud::params::{AnalysisConfig, CloudParams, ParameterMapping, SmoothingParams};
use spectrocloud::proximity::{LinkStrategy, ProximityRenderer};
use spectrocloud::raster::ImageCanvas;
use spectrocloud::Visualizer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    info!("Spectrocloud - audio-reactive particle cloud");

    let clip = AudioClip::from_wav(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let render_config = args.render_config();
    let recording = args.recording_config(clip.duration_secs());
    let cloud = CloudParams::default();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let strategy = if args.grid {
        LinkStrategy::Grid
    } else {
        LinkStrategy::BruteForce
    };
    let mut visualizer = Visualizer::new(
        &SmoothingParams::default(),
        ParameterMapping::default(),
        &cloud,
        &render_config,
        &mut rng,
    )?
    .with_renderer(ProximityRenderer::new(&cloud, &render_config).with_strategy(strategy));

    let mut analyzer = SpectrumAnalyzer::new(&AnalysisConfig::default())?;
    let mut spectrum = vec![0.0; analyzer.band_count()];
    let mut canvas = ImageCanvas::new(render_config.width, render_config.height);

    std::fs::create_dir_all(&recording.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            recording.output_dir.display()
        )
    })?;

    let total_frames = recording.total_frames();
    info!(
        "Rendering {} frames ({:.1}s @ {} fps) to {}",
        total_frames,
        recording.duration_secs,
        recording.fps,
        recording.output_dir.display()
    );

    for frame in 0..total_frames {
        let time_s = recording.frame_time(frame);

        analyzer.analyze(&clip, time_s, &mut spectrum);
        let params = visualizer.update(&spectrum, time_s)?;
        let links = visualizer.draw(&mut canvas, &render_config)?;

        let path = recording.frame_path(frame);
        canvas
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;

        if frame % recording.fps as usize == 0 {
            info!(
                "{:>6.1}s  radius {:>5.1}  velocity {:.3}  links {}",
                time_s, params.radius, params.velocity, links
            );
        }
    }

    info!("Done: {} frames written", total_frames);
    Ok(())
}
