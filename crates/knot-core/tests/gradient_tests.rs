use glam::Vec3;
use knot_core::gradient::{rgb_from_hex, Gradient};
use knot_core::{COLOR_END, COLOR_START};

#[test]
fn hex_decoding_normalizes_channels() {
    let magenta = rgb_from_hex(0xFF00FF);
    assert_eq!(magenta, Vec3::new(1.0, 0.0, 1.0));

    let end = rgb_from_hex(COLOR_END);
    assert!((end.x - 208.0 / 255.0).abs() < 1e-6);
    assert!((end.y - 19.0 / 255.0).abs() < 1e-6);
    assert!((end.z - 244.0 / 255.0).abs() < 1e-6);
}

#[test]
fn first_color_is_exactly_the_start() {
    let g = Gradient::from_hex(COLOR_START, COLOR_END);
    let colors = g.colors(100);
    assert_eq!(colors[0], g.start);
}

#[test]
fn colors_stay_on_the_segment_between_endpoints() {
    let g = Gradient::from_hex(COLOR_START, COLOR_END);
    let colors = g.colors(64);
    for c in &colors {
        for axis in 0..3 {
            let lo = g.start[axis].min(g.end[axis]);
            let hi = g.start[axis].max(g.end[axis]);
            assert!(c[axis] >= lo - 1e-6 && c[axis] <= hi + 1e-6);
        }
    }
}

#[test]
fn last_color_falls_short_of_the_end() {
    // progress = (n - 1) / n < 1, so the end color is never reached exactly
    let g = Gradient::from_hex(COLOR_START, COLOR_END);
    let n = 50;
    let colors = g.colors(n);
    let last = colors[n - 1];
    assert_ne!(last, g.end);
    let expected = g.at((n - 1) as f32 / n as f32);
    assert!((last - expected).length() < 1e-6);
}

#[test]
fn two_point_gradient_hits_the_midpoint() {
    let g = Gradient::from_hex(COLOR_START, COLOR_END);
    let colors = g.colors(2);
    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0], g.start);
    let mid = g.start + (g.end - g.start) * 0.5;
    assert!((colors[1] - mid).length() < 1e-6);
    // sanity against the known endpoint values
    assert!((colors[1].x - 0.908).abs() < 1e-3);
    assert!((colors[1].y - 0.0375).abs() < 1e-3);
    assert!((colors[1].z - 0.9785).abs() < 1e-3);
}

#[test]
fn zero_count_yields_no_colors() {
    let g = Gradient::from_hex(COLOR_START, COLOR_END);
    assert!(g.colors(0).is_empty());
}
