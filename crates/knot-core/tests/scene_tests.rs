use glam::Vec3;
use knot_core::gradient::rgb_from_hex;
use knot_core::scene::Scene;
use knot_core::{COLOR_START, LIGHT_INTENSITY, LIGHT_POSITION, RADIAL_SEGMENTS, TUBULAR_SEGMENTS};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn build_scene() -> Scene {
    let mut rng = StdRng::seed_from_u64(42);
    Scene::build(16.0 / 9.0, &mut rng).expect("scene build")
}

#[test]
fn knot_cloud_has_parallel_positions_and_colors() {
    let scene = build_scene();
    assert_eq!(scene.knot.len(), (TUBULAR_SEGMENTS + 1) * (RADIAL_SEGMENTS + 1));
    assert_eq!(scene.knot.positions().len(), scene.knot.colors().len());
}

#[test]
fn scatter_cloud_is_empty_but_well_formed() {
    let scene = build_scene();
    assert!(scene.scatter.is_empty());
    assert_eq!(scene.scatter.positions().len(), scene.scatter.colors().len());
}

#[test]
fn first_knot_color_is_the_gradient_start() {
    let scene = build_scene();
    assert_eq!(scene.knot.colors()[0], rgb_from_hex(COLOR_START));
}

#[test]
fn camera_looks_down_the_z_axis_at_the_origin() {
    let scene = build_scene();
    assert_eq!(scene.camera.eye, Vec3::new(0.0, 0.0, 2.0));
    assert_eq!(scene.camera.target, Vec3::ZERO);
    assert!((scene.camera.fovy_radians - 75.0_f32.to_radians()).abs() < 1e-6);
    assert_eq!(scene.camera.znear, 1.0);
    assert_eq!(scene.camera.zfar, 1000.0);
}

#[test]
fn camera_aspect_is_fixed_at_build_time() {
    // The aspect ratio comes solely from the surface size at startup;
    // nothing later in the scene's life is supposed to change it.
    let mut rng = StdRng::seed_from_u64(42);
    let scene = Scene::build(4.0 / 3.0, &mut rng).expect("scene build");
    assert_eq!(scene.camera.aspect, 4.0 / 3.0);
}

#[test]
fn view_proj_is_invertible() {
    let scene = build_scene();
    let vp = scene.camera.view_proj();
    assert!(vp.determinant().abs() > 1e-6);
}

#[test]
fn light_sits_at_its_fixed_offset() {
    let scene = build_scene();
    assert_eq!(scene.light.position, Vec3::from(LIGHT_POSITION));
    assert_eq!(scene.light.intensity, LIGHT_INTENSITY);
}
