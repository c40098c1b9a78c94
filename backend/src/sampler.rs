use cloud::Point;
use glam::{vec2, vec3};
use image::{DynamicImage, RgbImage};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Distance in pixels between sampled rows and columns.
    pub stride: u32,
    /// Minimum luminance gradient, in [0, 1], for a pixel to become a point.
    pub edge_threshold: f32,
    /// Upper bound on points per image.
    pub max_points: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            stride: 4,
            edge_threshold: 0.08,
            max_points: 4096,
        }
    }
}

/// Decode an uploaded image and sample it. Undecodable input yields no points.
pub fn sample_bytes(bytes: &[u8], config: &SamplerConfig) -> Vec<Point> {
    match image::load_from_memory(bytes) {
        Ok(img) => sample_image(&img, config),
        Err(e) => {
            warn!("Could not decode uploaded image: {}", e);
            Vec::new()
        }
    }
}

/// Keep pixels on a stride grid whose local luminance gradient reaches the
/// threshold. Positions are normalized to [0, 1] over the image extent.
pub fn sample_image(img: &DynamicImage, config: &SamplerConfig) -> Vec<Point> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let stride = config.stride.max(1) as usize;
    let x_extent = (width - 1).max(1) as f32;
    let y_extent = (height - 1).max(1) as f32;

    let mut points = Vec::new();
    for y in (0..height).step_by(stride) {
        for x in (0..width).step_by(stride) {
            if points.len() >= config.max_points {
                return points;
            }
            if gradient(&rgb, x, y) < config.edge_threshold {
                continue;
            }
            let [r, g, b] = rgb.get_pixel(x, y).0;
            points.push(Point::new(
                vec2(x as f32 / x_extent, y as f32 / y_extent),
                vec3(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0),
            ));
        }
    }
    points
}

fn luminance(img: &RgbImage, x: u32, y: u32) -> f32 {
    let [r, g, b] = img.get_pixel(x, y).0;
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0
}

/// Largest central difference along either axis, clamped at the borders.
fn gradient(img: &RgbImage, x: u32, y: u32) -> f32 {
    let (width, height) = img.dimensions();
    let (left, right) = (x.saturating_sub(1), (x + 1).min(width - 1));
    let (up, down) = (y.saturating_sub(1), (y + 1).min(height - 1));

    let dx = (luminance(img, right, y) - luminance(img, left, y)).abs();
    let dy = (luminance(img, x, down) - luminance(img, x, up)).abs();
    dx.max(dy)
}
