//! Per-frame displacement of the knot cloud toward/away from the pointer.

use glam::Vec2;

use crate::cloud::PointCloud;
use crate::constants::{TIME_SCALE, WAVE_AMPLITUDE, WAVE_FREQUENCY};
use crate::input::PointerState;

/// Recompute every point's z as a sine of its planar distance to the pointer.
///
/// `z = sin(5 * d - time) * 0.4` with `time = elapsed_ms * 0.005`, where `d`
/// is the XY-plane distance between the point and the pointer. Each call
/// derives z from x/y alone; displacement never accumulates across frames.
/// An empty cloud is a no-op over the loop. Bumps the cloud version so
/// renderers re-upload.
pub fn distort(cloud: &mut PointCloud, pointer: PointerState, elapsed_ms: f32) {
    let time = elapsed_ms * TIME_SCALE;
    let pointer = Vec2::new(pointer.x, pointer.y);
    for p in cloud.positions_mut() {
        let d = Vec2::new(p.x, p.y).distance(pointer);
        p.z = (WAVE_FREQUENCY * d - time).sin() * WAVE_AMPLITUDE;
    }
    cloud.mark_dirty();
}

/// Flatten the cloud back onto the XY plane, leaving x/y untouched.
///
/// Idempotent in the geometric state: a second call changes nothing but the
/// version. Wired to pointer-leave; the next frame's [`distort`] overwrites
/// it with the last-known pointer.
pub fn reset(cloud: &mut PointCloud) {
    for p in cloud.positions_mut() {
        p.z = 0.0;
    }
    cloud.mark_dirty();
}
