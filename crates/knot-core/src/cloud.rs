//! Point-cloud storage and the geometry generators that fill it.
//!
//! A [`PointCloud`] keeps parallel position and color arrays plus a version
//! counter. The counter is the explicit form of the renderer dirty flag:
//! mutating positions bumps it, and a renderer re-uploads a vertex buffer
//! only when the version it last saw is stale.

use glam::Vec3;
use rand::Rng;

use crate::constants::{
    KNOT_P, KNOT_Q, KNOT_RADIUS, RADIAL_SEGMENTS, TUBE_RADIUS, TUBULAR_SEGMENTS,
};

#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error("position/color length mismatch: {positions} positions, {colors} colors")]
    LengthMismatch { positions: usize, colors: usize },
}

/// Fixed-size point cloud with per-point colors.
///
/// Invariant: `positions.len() == colors.len()` for the cloud's lifetime;
/// index `i` in both arrays refers to the same logical point. Topology never
/// changes after construction, only coordinates do.
#[derive(Clone, Debug)]
pub struct PointCloud {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    version: u64,
}

impl PointCloud {
    pub fn new(positions: Vec<Vec3>, colors: Vec<Vec3>) -> Result<Self, CloudError> {
        if positions.len() != colors.len() {
            return Err(CloudError::LengthMismatch {
                positions: positions.len(),
                colors: colors.len(),
            });
        }
        Ok(Self {
            positions,
            colors,
            version: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Mutable position access for per-frame deformation. The caller must
    /// follow up with [`PointCloud::mark_dirty`] so renderers re-upload.
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    /// Current buffer version; changes whenever positions were mutated.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn mark_dirty(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

/// Point on the (p, q) torus-knot centerline at curve parameter `u`.
fn knot_curve_point(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let quotient = q / p * u;
    let cs = quotient.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * quotient.sin() * 0.5,
    )
}

/// Sample the tube surface of a torus knot into a flat position list.
///
/// Walks the knot centerline in `tubular_segments` steps and sweeps a ring of
/// `radial_segments` samples around it, oriented by a frame built from the
/// local tangent. Both loops are inclusive of the seam sample, so the result
/// holds `(tubular_segments + 1) * (radial_segments + 1)` points.
pub fn torus_knot_positions(
    radius: f32,
    tube: f32,
    tubular_segments: usize,
    radial_segments: usize,
    p: u32,
    q: u32,
) -> Vec<Vec3> {
    let p = p as f32;
    let q = q as f32;
    let mut positions = Vec::with_capacity((tubular_segments + 1) * (radial_segments + 1));

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p * std::f32::consts::TAU;
        let p1 = knot_curve_point(u, p, q, radius);
        let p2 = knot_curve_point(u + 0.01, p, q, radius);

        // Approximate Frenet frame from the forward difference.
        let tangent = p2 - p1;
        let normal_seed = p2 + p1;
        let binormal = tangent.cross(normal_seed).normalize();
        let normal = binormal.cross(tangent).normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            positions.push(p1 + cx * normal + cy * binormal);
        }
    }
    positions
}

/// Torus-knot positions at the scene's fixed sampling parameters.
pub fn scene_knot_positions() -> Vec<Vec3> {
    torus_knot_positions(
        KNOT_RADIUS,
        TUBE_RADIUS,
        TUBULAR_SEGMENTS,
        RADIAL_SEGMENTS,
        KNOT_P,
        KNOT_Q,
    )
}

/// Uniformly scattered positions for the ambient cloud, each coordinate drawn
/// from `(-0.5, 0.5) * extent`. `count == 0` yields an empty list.
pub fn scatter_positions(count: usize, extent: f32, rng: &mut impl Rng) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
            )
        })
        .collect()
}
