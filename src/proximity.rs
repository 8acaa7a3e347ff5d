//! Cloud drawing: particle dots plus proximity links.
//!
//! Every unordered pair closer than the link distance gets one line. The
//! pair search is the dominant per-frame cost (N²/2 checks for brute force);
//! the grid strategy buckets particles into cells about one link distance wide and
//! only tests neighbouring cells, producing the identical pair list.

use std::collections::HashMap;

use glam::Vec2;
use log::trace;

use crate::error::{Error, Result};
use crate::params::{CloudParams, RenderConfig};

/// RGB color
pub type Color = [u8; 3];

/// Drawing surface the cloud is rendered onto
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Shift the drawing origin by `offset` (cumulative)
    fn translate(&mut self, offset: Vec2);

    /// Filled disk
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Line segment
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
}

/// Pair search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStrategy {
    /// Test every unordered pair
    #[default]
    BruteForce,
    /// Uniform grid with cells about one link distance wide
    Grid,
}

/// Collect every pair (j, k), j < k, with distance < `threshold`
///
/// Pairs are appended to `links` in ascending (j, k) order for both strategies.
pub fn find_links(
    positions: &[Vec2],
    threshold: f32,
    strategy: LinkStrategy,
    links: &mut Vec<(usize, usize)>,
) -> Result<()> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(Error::InvalidThreshold(threshold));
    }
    links.clear();
    if threshold == 0.0 {
        return Ok(());
    }

    match strategy {
        LinkStrategy::BruteForce => brute_force_links(positions, threshold, links),
        LinkStrategy::Grid => grid_links(positions, threshold, links),
    }
    Ok(())
}

fn brute_force_links(positions: &[Vec2], threshold: f32, links: &mut Vec<(usize, usize)>) {
    let threshold_sq = threshold * threshold;
    for (j, a) in positions.iter().enumerate() {
        for (k, b) in positions.iter().enumerate().skip(j + 1) {
            if a.distance_squared(*b) < threshold_sq {
                links.push((j, k));
            }
        }
    }
}

fn grid_links(positions: &[Vec2], threshold: f32, links: &mut Vec<(usize, usize)>) {
    let threshold_sq = threshold * threshold;
    // Slightly wider than the link distance so division rounding can never
    // put a linked pair two cells apart
    let cell_size = threshold * 1.001;
    let cell_of = |p: Vec2| {
        (
            (p.x / cell_size).floor() as i32,
            (p.y / cell_size).floor() as i32,
        )
    };

    let mut cells: HashMap<(i32, i32), Vec<usize>> = HashMap::new();
    for (index, &position) in positions.iter().enumerate() {
        cells.entry(cell_of(position)).or_default().push(index);
    }

    for (j, &a) in positions.iter().enumerate() {
        // Non-finite or huge coordinates saturate in `as i32`; saturating
        // neighbours keep adjacent cells adjacent without overflow
        let (cx, cy) = cell_of(a);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let cell = (cx.saturating_add(dx), cy.saturating_add(dy));
                let Some(indices) = cells.get(&cell) else {
                    continue;
                };
                for &k in indices {
                    if k > j && a.distance_squared(positions[k]) < threshold_sq {
                        links.push((j, k));
                    }
                }
            }
        }
    }

    links.sort_unstable();
}

/// Draws the particle cloud and its proximity links
#[derive(Debug, Clone)]
pub struct ProximityRenderer {
    dot_radius: f32,
    link_distance: f32,
    color: Color,
    background: Color,
    strategy: LinkStrategy,
    links: Vec<(usize, usize)>,
}

impl ProximityRenderer {
    pub fn new(cloud: &CloudParams, render: &RenderConfig) -> Self {
        Self {
            dot_radius: cloud.dot_radius,
            link_distance: cloud.link_distance,
            color: render.foreground,
            background: render.background,
            strategy: LinkStrategy::default(),
            links: Vec::new(),
        }
    }

    /// Use a different pair search strategy
    pub fn with_strategy(mut self, strategy: LinkStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn link_distance(&self) -> f32 {
        self.link_distance
    }

    /// Links found by the most recent draw
    pub fn links(&self) -> &[(usize, usize)] {
        &self.links
    }

    /// Draw one frame of the cloud centered on `origin`
    ///
    /// Returns the number of links drawn.
    pub fn draw<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        positions: &[Vec2],
        origin: Vec2,
        distance_threshold: f32,
    ) -> Result<usize> {
        find_links(positions, distance_threshold, self.strategy, &mut self.links)?;

        canvas.clear(self.background);
        canvas.translate(origin);

        for &position in positions {
            canvas.fill_circle(position, self.dot_radius, self.color);
        }
        for &(j, k) in &self.links {
            canvas.line(positions[j], positions[k], self.color);
        }

        canvas.translate(-origin);

        trace!("drew {} points, {} links", positions.len(), self.links.len());
        Ok(self.links.len())
    }
}
