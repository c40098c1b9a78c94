use glam::{Vec2, Vec3, Vec4};
use serde::Serialize;
use crate::codec::clamp01;

/// A single sample of the source image: normalized position plus RGB color.
///
/// Every component lies in [0, 1]. Alpha is not part of the wire format and
/// is always 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pos: Vec2,
    color: Vec3,
}

impl Point {
    /// Components outside [0, 1] are clamped, NaN becomes 0.
    pub fn new(pos: Vec2, color: Vec3) -> Self {
        Self {
            pos: pos.map(clamp01),
            color: color.map(clamp01),
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn rgba(&self) -> Vec4 {
        self.color.extend(1.0)
    }
}
