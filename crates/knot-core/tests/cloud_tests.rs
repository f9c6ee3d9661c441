use glam::Vec3;
use knot_core::cloud::{scatter_positions, scene_knot_positions, PointCloud};
use knot_core::{KNOT_RADIUS, RADIAL_SEGMENTS, TUBE_RADIUS, TUBULAR_SEGMENTS};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn constructor_rejects_mismatched_arrays() {
    let positions = vec![Vec3::ZERO, Vec3::ONE];
    let colors = vec![Vec3::ONE];
    assert!(PointCloud::new(positions, colors).is_err());
}

#[test]
fn knot_sampling_produces_the_fixed_vertex_count() {
    // Inclusive seam samples on both loops
    let positions = scene_knot_positions();
    assert_eq!(positions.len(), (TUBULAR_SEGMENTS + 1) * (RADIAL_SEGMENTS + 1));
}

#[test]
fn knot_points_stay_inside_the_expected_volume() {
    // Curve radius in the XY plane is at most radius * 3 / 2; the tube adds
    // at most TUBE_RADIUS on top. Curve |z| is at most radius / 2.
    let max_planar = KNOT_RADIUS * 1.5 + TUBE_RADIUS;
    let max_z = KNOT_RADIUS * 0.5 + TUBE_RADIUS;
    for p in scene_knot_positions() {
        assert!(p.x.hypot(p.y) <= max_planar + 1e-4);
        assert!(p.z.abs() <= max_z + 1e-4);
    }
}

#[test]
fn knot_is_genuinely_three_dimensional() {
    // No distortion has run yet, so z comes purely from the knot shape.
    let positions = scene_knot_positions();
    assert!(positions.iter().any(|p| p.z.abs() > 1e-3));
    assert!(positions.iter().all(|p| p.z.is_finite()));
}

#[test]
fn scatter_cloud_respects_count_and_extent() {
    let mut rng = StdRng::seed_from_u64(7);
    assert!(scatter_positions(0, 5.0, &mut rng).is_empty());

    let extent = 5.0;
    let points = scatter_positions(32, extent, &mut rng);
    assert_eq!(points.len(), 32);
    for p in points {
        assert!(p.x.abs() <= extent * 0.5);
        assert!(p.y.abs() <= extent * 0.5);
        assert!(p.z.abs() <= extent * 0.5);
    }
}

#[test]
fn version_only_moves_when_marked() {
    let mut cloud = PointCloud::new(vec![Vec3::ZERO], vec![Vec3::ONE]).unwrap();
    assert_eq!(cloud.version(), 0);
    let _ = cloud.positions();
    let _ = cloud.colors();
    assert_eq!(cloud.version(), 0);
    cloud.positions_mut()[0].z = 1.0;
    cloud.mark_dirty();
    assert_eq!(cloud.version(), 1);
}
