use glam::UVec2;
use serde::Serialize;
use crate::point::Point;

/// Resolution reported for every decoded cloud. The wire format carries no
/// image dimensions, so this stays a placeholder.
const DECODED_RESOLUTION: UVec2 = UVec2::ONE;

/// Ordered points in wire order, tagged with the source resolution.
///
/// A cloud has zero points exactly when its resolution is (0, 0).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointCloud {
    points: Vec<Point>,
    resolution: UVec2,
}

impl PointCloud {
    pub fn new(points: Vec<Point>) -> Self {
        if points.is_empty() {
            return Self::empty();
        }
        Self {
            points,
            resolution: DECODED_RESOLUTION,
        }
    }

    /// The "no data" sentinel handed out for every failed fetch.
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            resolution: UVec2::ZERO,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn resolution(&self) -> UVec2 {
        self.resolution
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Default for PointCloud {
    fn default() -> Self {
        Self::empty()
    }
}
