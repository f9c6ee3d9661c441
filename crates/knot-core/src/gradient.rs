//! Two-color gradient used to paint the knot along its vertex order.

use glam::Vec3;

/// Normalized RGB color from a `0xRRGGBB` literal.
#[inline]
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Linear gradient between two RGB endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Gradient {
    pub start: Vec3,
    pub end: Vec3,
}

impl Gradient {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    pub fn from_hex(start: u32, end: u32) -> Self {
        Self::new(rgb_from_hex(start), rgb_from_hex(end))
    }

    /// Color at `progress` in [0, 1], componentwise lerp.
    #[inline]
    pub fn at(&self, progress: f32) -> Vec3 {
        self.start + (self.end - self.start) * progress
    }

    /// One color per point, keyed by index fraction `i / count`.
    ///
    /// Note the division by `count` rather than `count - 1`: the last point
    /// lands at `(count - 1) / count` and never quite reaches the end color.
    pub fn colors(&self, count: usize) -> Vec<Vec3> {
        if count == 0 {
            return Vec::new();
        }
        (0..count)
            .map(|i| self.at(i as f32 / count as f32))
            .collect()
    }
}
