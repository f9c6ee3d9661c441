//! Pointer state shared between event handlers and the frame callback.

/// Latest pointer location in normalized device coordinates, each axis in
/// [-1, 1]. Defaults to the center `(0, 0)` until the first pointer move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Map surface-local pixel coordinates to NDC.
///
/// `x` grows rightward, `y` is flipped so it grows upward. A degenerate
/// surface (zero width or height) maps to the neutral center pointer rather
/// than dividing by zero.
#[inline]
pub fn pointer_ndc(surface_x: f32, surface_y: f32, width: f32, height: f32) -> PointerState {
    if width <= 0.0 || height <= 0.0 {
        return PointerState::default();
    }
    PointerState {
        x: (surface_x / width) * 2.0 - 1.0,
        y: -(surface_y / height) * 2.0 + 1.0,
    }
}
