//! One-shot scene construction: the two point clouds, camera, and light.
//!
//! These types avoid platform-specific APIs and are shared by the web and
//! native frontends, which only add a surface and a pipeline around them.

use glam::{Mat4, Vec3};
use rand::Rng;

use crate::cloud::{scatter_positions, scene_knot_positions, CloudError, PointCloud};
use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR, COLOR_END, COLOR_START, LIGHT_INTENSITY,
    LIGHT_POSITION, SCATTER_COUNT, SCATTER_EXTENT,
};
use crate::gradient::Gradient;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    /// Combined view-projection matrix for the vertex shader uniform.
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Single white point light. Scene data only: the point material is unlit,
/// so the light influences nothing visually.
#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
}

/// Everything the renderers consume: the knot cloud driven by the distortion
/// engine, the (empty) ambient scatter cloud, camera, and light.
#[derive(Clone, Debug)]
pub struct Scene {
    pub knot: PointCloud,
    pub scatter: PointCloud,
    pub camera: Camera,
    pub light: PointLight,
}

impl Scene {
    /// Build the scene once at startup for the given surface aspect ratio.
    pub fn build(aspect: f32, rng: &mut impl Rng) -> Result<Self, CloudError> {
        let gradient = Gradient::from_hex(COLOR_START, COLOR_END);

        let knot_positions = scene_knot_positions();
        let knot_colors = gradient.colors(knot_positions.len());
        let knot = PointCloud::new(knot_positions, knot_colors)?;

        let scatter_pos = scatter_positions(SCATTER_COUNT, SCATTER_EXTENT, rng);
        let scatter_colors = gradient.colors(scatter_pos.len());
        let scatter = PointCloud::new(scatter_pos, scatter_colors)?;

        log::info!(
            "[scene] knot points={} scatter points={}",
            knot.len(),
            scatter.len()
        );

        Ok(Self {
            knot,
            scatter,
            camera: Camera {
                eye: Vec3::new(0.0, 0.0, CAMERA_Z),
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect,
                fovy_radians: CAMERA_FOVY_DEG.to_radians(),
                znear: CAMERA_ZNEAR,
                zfar: CAMERA_ZFAR,
            },
            light: PointLight {
                position: Vec3::from(LIGHT_POSITION),
                intensity: LIGHT_INTENSITY,
            },
        })
    }
}
