use knot_core::input::{pointer_ndc, PointerState};

#[test]
fn surface_center_maps_to_origin() {
    let p = pointer_ndc(400.0, 300.0, 800.0, 600.0);
    assert!(p.x.abs() < 1e-6);
    assert!(p.y.abs() < 1e-6);
}

#[test]
fn corners_map_to_the_unit_square() {
    let tl = pointer_ndc(0.0, 0.0, 800.0, 600.0);
    assert_eq!((tl.x, tl.y), (-1.0, 1.0));

    let br = pointer_ndc(800.0, 600.0, 800.0, 600.0);
    assert_eq!((br.x, br.y), (1.0, -1.0));
}

#[test]
fn y_axis_is_inverted() {
    // Pixel y grows downward, NDC y grows upward
    let upper = pointer_ndc(100.0, 100.0, 400.0, 400.0);
    let lower = pointer_ndc(100.0, 300.0, 400.0, 400.0);
    assert!(upper.y > lower.y);
}

#[test]
fn degenerate_surface_yields_the_neutral_pointer() {
    assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), PointerState::default());
    assert_eq!(pointer_ndc(10.0, 10.0, 800.0, 0.0), PointerState::default());
}

#[test]
fn default_pointer_sits_at_the_center() {
    let p = PointerState::default();
    assert_eq!((p.x, p.y), (0.0, 0.0));
}
