//! CPU rasterizer implementing `Canvas` on an RGB image.

use std::path::Path;

use glam::Vec2;
use image::{Rgb, RgbImage};

use crate::proximity::{Canvas, Color};

/// Offscreen RGB frame
pub struct ImageCanvas {
    image: RgbImage,
    origin: Vec2,
}

impl ImageCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
            origin: Vec2::ZERO,
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Write the frame as PNG
    pub fn save(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        self.image.save(path)
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

impl Canvas for ImageCanvas {
    fn clear(&mut self, color: Color) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgb(color);
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.origin += offset;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let center = center + self.origin;
        let radius_sq = radius * radius;

        let x0 = (center.x - radius).floor() as i64;
        let x1 = (center.x + radius).ceil() as i64;
        let y0 = (center.y - radius).floor() as i64;
        let y1 = (center.y + radius).ceil() as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                // Pixel centers inside the disk
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if p.distance_squared(center) <= radius_sq {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let from = from + self.origin;
        let to = to + self.origin;
        let delta = to - from;

        // DDA: one sample per pixel along the major axis
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
        let step = delta / steps as f32;
        let mut p = from;
        for _ in 0..=steps {
            self.put(p.x.floor() as i64, p.y.floor() as i64, color);
            p += step;
        }
    }
}
